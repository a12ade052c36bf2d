//! Email document rendering.
//!
//! Two documents are produced per submission: a confirmation addressed to the
//! requester and a notification addressed to the practice mailbox. Each is
//! rendered as HTML plus a plaintext alternative. Rendering is a pure
//! function of the submitted fields: HTML bodies only ever see sanitized
//! values, plaintext bodies use the raw (newline-preserving) values.

use crate::constants::{PRACTICE_ADDRESS, PRACTICE_EMAIL, PRACTICE_NAME, PRACTICE_PHONE};
use crate::sanitize::{escape_html, escape_html_multiline};
use crate::AppointmentRequest;

pub const CONFIRMATION_SUBJECT: &str =
    "Appointment Request Confirmation - Somerville Dental Associates";

/// Sanitized copies of every submitted field, for HTML embedding only.
///
/// `appointment_request` has newlines converted to `<br>` after escaping;
/// `phone_digits` is the bare digit string used for `tel:` links.
#[derive(Debug, Clone)]
pub struct SanitizedRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_carrier: String,
    pub insurance_id: String,
    pub appointment_request: String,
    pub phone_digits: String,
}

impl SanitizedRequest {
    pub fn from_request(request: &AppointmentRequest) -> Self {
        Self {
            name: escape_html(&request.name),
            email: escape_html(&request.email),
            phone: escape_html(&request.phone),
            insurance_carrier: escape_html(&request.insurance_carrier),
            insurance_id: escape_html(&request.insurance_id),
            appointment_request: escape_html_multiline(&request.appointment_request),
            phone_digits: request.phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }
}

/// A rendered email: subject plus HTML and plaintext bodies.
#[derive(Debug, Clone)]
pub struct EmailDocument {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders the confirmation sent back to the requester.
pub fn confirmation_document(
    safe: &SanitizedRequest,
    request: &AppointmentRequest,
) -> EmailDocument {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Appointment Request Confirmation</title>
</head>
<body style="margin: 0; padding: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background-color: #f3f4f6;">
  <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="background-color: #f3f4f6; padding: 40px 0;">
    <tr>
      <td align="center">
        <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="600" style="max-width: 600px; background-color: #ffffff; border-radius: 16px; overflow: hidden;">
          <tr>
            <td style="background-color: #0f172a; padding: 30px; text-align: center;">
              <h1 style="margin: 0; color: #ffffff; font-size: 28px;">
                <span style="font-weight: bold;">Somerville</span> <span style="font-weight: normal;">Dental</span>
              </h1>
              <p style="margin: 10px 0 0 0; color: #94a3b8; font-size: 16px;">Quality Dental Care</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px 30px;">
              <h2 style="margin: 0 0 20px 0; color: #1e293b; font-size: 24px;">Appointment Request Received</h2>
              <p style="margin: 0 0 20px 0; color: #475569; font-size: 16px; line-height: 1.6;">
                Dear {name},
              </p>
              <p style="margin: 0 0 20px 0; color: #475569; font-size: 16px; line-height: 1.6;">
                Thank you for your appointment request with {practice_name}. We have received your information and our office will get back to you shortly to schedule your appointment time.
              </p>
              <div style="background-color: #f8fafc; border-left: 4px solid #1e40af; padding: 20px; margin: 30px 0; border-radius: 8px;">
                <p style="margin: 0 0 10px 0; color: #1e293b; font-size: 14px; font-weight: bold; text-transform: uppercase;">Your Appointment Request Details:</p>
                <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%">
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px; width: 150px;"><strong>Name:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px;">{name}</td>
                  </tr>
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px;"><strong>Email:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px;">{email}</td>
                  </tr>
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px;"><strong>Phone:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px;">{phone}</td>
                  </tr>
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px;"><strong>Insurance:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px;">{insurance_carrier}</td>
                  </tr>
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px;"><strong>Insurance ID:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px;">{insurance_id}</td>
                  </tr>
                  <tr>
                    <td style="padding: 5px 0; color: #64748b; font-size: 14px; vertical-align: top;"><strong>Request:</strong></td>
                    <td style="padding: 5px 0; color: #1e293b; font-size: 14px; line-height: 1.6;">{appointment_request}</td>
                  </tr>
                </table>
              </div>
              <p style="margin: 20px 0; color: #475569; font-size: 16px; line-height: 1.6;">
                Our team will review your request and contact you within 24-48 hours to confirm your appointment time. If you have any questions or need to make changes to your request, please don't hesitate to contact us.
              </p>
              <div style="margin: 30px 0; padding: 20px; background-color: #f1f5f9; border-radius: 8px;">
                <p style="margin: 0 0 10px 0; color: #1e293b; font-size: 14px; font-weight: bold;">Contact Information:</p>
                <p style="margin: 5px 0; color: #64748b; font-size: 14px;"><strong>Phone:</strong> {practice_phone}</p>
                <p style="margin: 5px 0; color: #64748b; font-size: 14px;"><strong>Email:</strong> {practice_email}</p>
                <p style="margin: 5px 0; color: #64748b; font-size: 14px;"><strong>Address:</strong> {practice_address}</p>
              </div>
              <p style="margin: 20px 0 0 0; color: #475569; font-size: 16px; line-height: 1.6;">
                We look forward to seeing you soon!
              </p>
              <p style="margin: 30px 0 0 0; color: #475569; font-size: 16px; line-height: 1.6;">
                Best regards,<br>
                <strong style="color: #1e293b;">{practice_name}</strong>
              </p>
            </td>
          </tr>
          <tr>
            <td style="background-color: #1e293b; padding: 30px; text-align: center;">
              <p style="margin: 0 0 10px 0; color: #94a3b8; font-size: 14px;">&copy; {practice_name}, All rights reserved</p>
              <p style="margin: 0; color: #64748b; font-size: 12px;">{practice_address}</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#,
        name = safe.name,
        email = safe.email,
        phone = safe.phone,
        insurance_carrier = safe.insurance_carrier,
        insurance_id = safe.insurance_id,
        appointment_request = safe.appointment_request,
        practice_name = PRACTICE_NAME,
        practice_phone = PRACTICE_PHONE,
        practice_email = PRACTICE_EMAIL,
        practice_address = PRACTICE_ADDRESS,
    );

    let text = format!(
        "Dear {name},\n\n\
         Thank you for your appointment request with {practice_name}. We have received your information and our office will get back to you shortly to schedule your appointment time.\n\n\
         Your Appointment Request Details:\n\
         - Name: {name}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Insurance: {insurance_carrier}\n\
         - Insurance ID: {insurance_id}\n\
         - Request: {appointment_request}\n\n\
         Our team will review your request and contact you within 24-48 hours to confirm your appointment time.\n\n\
         Contact Information:\n\
         Phone: {practice_phone}\n\
         Email: {practice_email}\n\
         Address: {practice_address}\n\n\
         We look forward to seeing you soon!\n\n\
         Best regards,\n\
         {practice_name}\n",
        name = request.name,
        email = request.email,
        phone = request.phone,
        insurance_carrier = request.insurance_carrier,
        insurance_id = request.insurance_id,
        appointment_request = request.appointment_request,
        practice_name = PRACTICE_NAME,
        practice_phone = PRACTICE_PHONE,
        practice_email = PRACTICE_EMAIL,
        practice_address = PRACTICE_ADDRESS,
    );

    EmailDocument {
        subject: CONFIRMATION_SUBJECT.to_string(),
        html,
        text,
    }
}

/// Renders the notification sent to the practice mailbox.
///
/// The quick-action links are built from the sanitized email and the bare
/// phone digits, so staff can reply or call with one click.
pub fn business_document(safe: &SanitizedRequest, request: &AppointmentRequest) -> EmailDocument {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Appointment Request</title>
</head>
<body style="margin: 0; padding: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background-color: #f3f4f6;">
  <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="background-color: #f3f4f6; padding: 40px 0;">
    <tr>
      <td align="center">
        <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="600" style="max-width: 600px; background-color: #ffffff; border-radius: 16px; overflow: hidden;">
          <tr>
            <td style="background-color: #0f172a; padding: 30px; text-align: center;">
              <h1 style="margin: 0; color: #ffffff; font-size: 28px;">
                <span style="font-weight: bold;">Somerville</span> <span style="font-weight: normal;">Dental</span>
              </h1>
              <p style="margin: 10px 0 0 0; color: #94a3b8; font-size: 16px;">New Appointment Request</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px 30px;">
              <h2 style="margin: 0 0 20px 0; color: #1e293b; font-size: 24px;">New Appointment Request Received</h2>
              <p style="margin: 0 0 30px 0; color: #475569; font-size: 16px; line-height: 1.6;">
                A new appointment request has been submitted through the website. Please review the details below and contact the patient to schedule their appointment.
              </p>
              <div style="background-color: #f8fafc; border: 2px solid #1e40af; padding: 25px; margin: 30px 0; border-radius: 8px;">
                <p style="margin: 0 0 20px 0; color: #1e293b; font-size: 16px; font-weight: bold; text-transform: uppercase; border-bottom: 2px solid #1e40af; padding-bottom: 10px;">Patient Information:</p>
                <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="margin-bottom: 20px;">
                  <tr>
                    <td style="padding: 8px 0; color: #64748b; font-size: 14px; width: 180px;"><strong>Full Name:</strong></td>
                    <td style="padding: 8px 0; color: #1e293b; font-size: 15px;">{name}</td>
                  </tr>
                  <tr>
                    <td style="padding: 8px 0; color: #64748b; font-size: 14px;"><strong>Email Address:</strong></td>
                    <td style="padding: 8px 0; font-size: 15px;"><a href="mailto:{email}" style="color: #1e40af; text-decoration: none;">{email}</a></td>
                  </tr>
                  <tr>
                    <td style="padding: 8px 0; color: #64748b; font-size: 14px;"><strong>Phone Number:</strong></td>
                    <td style="padding: 8px 0; font-size: 15px;"><a href="tel:{phone_digits}" style="color: #1e40af; text-decoration: none;">{phone}</a></td>
                  </tr>
                </table>
                <p style="margin: 20px 0 10px 0; color: #1e293b; font-size: 16px; font-weight: bold; text-transform: uppercase; border-bottom: 2px solid #1e40af; padding-bottom: 10px;">Insurance Information:</p>
                <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%">
                  <tr>
                    <td style="padding: 8px 0; color: #64748b; font-size: 14px; width: 180px;"><strong>Insurance Carrier:</strong></td>
                    <td style="padding: 8px 0; color: #1e293b; font-size: 15px;">{insurance_carrier}</td>
                  </tr>
                  <tr>
                    <td style="padding: 8px 0; color: #64748b; font-size: 14px;"><strong>Insurance ID Number:</strong></td>
                    <td style="padding: 8px 0; color: #1e293b; font-size: 15px;">{insurance_id}</td>
                  </tr>
                </table>
              </div>
              <div style="background-color: #fef3c7; border-left: 4px solid #f59e0b; padding: 20px; margin: 30px 0; border-radius: 8px;">
                <p style="margin: 0 0 10px 0; color: #92400e; font-size: 14px; font-weight: bold; text-transform: uppercase;">Appointment Request:</p>
                <p style="margin: 0; color: #78350f; font-size: 15px; line-height: 1.6;">{appointment_request}</p>
              </div>
              <div style="background-color: #dbeafe; border-left: 4px solid #2563eb; padding: 20px; margin: 30px 0; border-radius: 8px;">
                <p style="margin: 0 0 15px 0; color: #1e40af; font-size: 14px; font-weight: bold;">Quick Actions:</p>
                <table role="presentation" cellspacing="0" cellpadding="0" border="0">
                  <tr>
                    <td style="padding: 5px 0;">
                      <a href="mailto:{email}?subject=Re: Appointment Request - {practice_name}" style="display: inline-block; background-color: #1e40af; color: #ffffff; padding: 10px 20px; text-decoration: none; border-radius: 6px; font-size: 14px; margin-right: 10px;">Reply to Patient</a>
                    </td>
                    <td style="padding: 5px 0;">
                      <a href="tel:{phone_digits}" style="display: inline-block; background-color: #059669; color: #ffffff; padding: 10px 20px; text-decoration: none; border-radius: 6px; font-size: 14px;">Call Patient</a>
                    </td>
                  </tr>
                </table>
              </div>
              <p style="margin: 30px 0 0 0; color: #64748b; font-size: 14px; line-height: 1.6;">
                <strong>Note:</strong> A confirmation email has been automatically sent to the patient. Please contact them within 24-48 hours to schedule their appointment.
              </p>
            </td>
          </tr>
          <tr>
            <td style="background-color: #1e293b; padding: 30px; text-align: center;">
              <p style="margin: 0 0 10px 0; color: #94a3b8; font-size: 14px;">&copy; {practice_name}, All rights reserved</p>
              <p style="margin: 0; color: #64748b; font-size: 12px;">{practice_address}</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#,
        name = safe.name,
        email = safe.email,
        phone = safe.phone,
        phone_digits = safe.phone_digits,
        insurance_carrier = safe.insurance_carrier,
        insurance_id = safe.insurance_id,
        appointment_request = safe.appointment_request,
        practice_name = PRACTICE_NAME,
        practice_address = PRACTICE_ADDRESS,
    );

    let text = format!(
        "New Appointment Request Received\n\n\
         A new appointment request has been submitted through the website. Please review the details below and contact the patient to schedule their appointment.\n\n\
         Patient Information:\n\
         - Full Name: {name}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\n\
         Insurance Information:\n\
         - Insurance Carrier: {insurance_carrier}\n\
         - Insurance ID Number: {insurance_id}\n\n\
         Appointment Request:\n\
         {appointment_request}\n\n\
         Quick Actions:\n\
         - Reply to Patient: {email}\n\
         - Call Patient: {phone}\n\n\
         Note: A confirmation email has been automatically sent to the patient. Please contact them within 24-48 hours to schedule their appointment.\n",
        name = request.name,
        email = request.email,
        phone = request.phone,
        insurance_carrier = request.insurance_carrier,
        insurance_id = request.insurance_id,
        appointment_request = request.appointment_request,
    );

    EmailDocument {
        subject: format!(
            "New Appointment Request from {} - {}",
            request.name, request.phone
        ),
        html,
        text,
    }
}
