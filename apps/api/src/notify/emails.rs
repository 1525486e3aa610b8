//! Decision-keyed email content. Each builder returns (subject, html, text).

use crate::agent::questions::FollowUpQuestion;

pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Sent when the agent auto-shortlists a candidate.
pub fn shortlist_email(candidate_name: &str, job_title: &str) -> EmailContent {
    let subject = format!("You've been shortlisted for {job_title}");
    let text = format!(
        "Hi {candidate_name},\n\n\
         Good news: your application for {job_title} has been shortlisted. \
         Our team will reach out shortly with next steps.\n\n\
         Best regards,\nThe Hiring Team"
    );
    let html = format!(
        "<html><body>\
         <p>Hi {candidate_name},</p>\
         <p>Good news: your application for <strong>{job_title}</strong> has been \
         shortlisted. Our team will reach out shortly with next steps.</p>\
         <p>Best regards,<br>The Hiring Team</p>\
         </body></html>"
    );
    EmailContent {
        subject,
        html,
        text,
    }
}

/// Sent when the agent needs follow-up answers before deciding.
pub fn questions_email(
    candidate_name: &str,
    job_title: &str,
    questions: &[FollowUpQuestion],
) -> EmailContent {
    let subject = format!("A few follow-up questions about your {job_title} application");

    let text_list: String = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}\n", i + 1, q.question))
        .collect();
    let html_list: String = questions
        .iter()
        .map(|q| format!("<li>{}</li>", q.question))
        .collect();

    let text = format!(
        "Hi {candidate_name},\n\n\
         Thanks for applying for {job_title}. To complete our review, could you \
         answer the following:\n\n{text_list}\n\
         Reply to this email with your answers.\n\n\
         Best regards,\nThe Hiring Team"
    );
    let html = format!(
        "<html><body>\
         <p>Hi {candidate_name},</p>\
         <p>Thanks for applying for <strong>{job_title}</strong>. To complete our \
         review, could you answer the following:</p>\
         <ol>{html_list}</ol>\
         <p>Reply to this email with your answers.</p>\
         <p>Best regards,<br>The Hiring Team</p>\
         </body></html>"
    );
    EmailContent {
        subject,
        html,
        text,
    }
}

/// Sent when the agent auto-rejects a candidate.
pub fn rejection_email(candidate_name: &str, job_title: &str) -> EmailContent {
    let subject = format!("Update on your {job_title} application");
    let text = format!(
        "Hi {candidate_name},\n\n\
         Thank you for your interest in {job_title}. After careful review, we \
         will not be moving forward with your application at this time. We \
         encourage you to apply for future openings that match your experience.\n\n\
         Best regards,\nThe Hiring Team"
    );
    let html = format!(
        "<html><body>\
         <p>Hi {candidate_name},</p>\
         <p>Thank you for your interest in <strong>{job_title}</strong>. After \
         careful review, we will not be moving forward with your application at \
         this time. We encourage you to apply for future openings that match \
         your experience.</p>\
         <p>Best regards,<br>The Hiring Team</p>\
         </body></html>"
    );
    EmailContent {
        subject,
        html,
        text,
    }
}
