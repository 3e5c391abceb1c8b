use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::University;

// Escape set matching encodeURIComponent: unreserved marks stay bare.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a mailto URI for the grad coordinator with a pre-filled
/// subject and body. Falls back to "Statistics" when no subjects are
/// selected. The address itself is not validated.
pub fn mailto_link(email: &str, university: &University, selected_subjects: &[String]) -> String {
    let focus = if selected_subjects.is_empty() {
        "Statistics".to_string()
    } else {
        selected_subjects.join(", ")
    };

    let subject = format!("Inquiry about graduate programs in {focus}");
    let body = format!(
        "Hello Graduate Coordinator,\n\nI am interested in {focus} programs at {}. \
         Could you please share details on application timelines, funding for \
         international students, assistantship opportunities, and admission \
         requirements?\n\nThank you.\n",
        university.name
    );

    format!(
        "mailto:{email}?subject={}&body={}",
        utf8_percent_encode(&subject, MAILTO_SET),
        utf8_percent_encode(&body, MAILTO_SET)
    )
}
