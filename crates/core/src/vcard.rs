//! vCard 3.0 text block assembly for contact-card QR codes.

/// Contact fields for a vCard payload. Absent request fields arrive as
/// empty strings.
#[derive(Debug, Clone, Default)]
pub struct VcardFields {
    pub first_name: String,
    pub last_name: String,
    pub org: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub url: String,
    pub address: String,
}

/// Render a vCard 3.0 text block.
///
/// `N`/`FN` are always present (built from the names, even when blank);
/// the optional lines (`ORG`, `TITLE`, `TEL`, `EMAIL`, `ADR`, `URL`) are
/// omitted entirely when their field is blank, in that fixed order.
pub fn render_vcard(fields: &VcardFields) -> String {
    let mut v = String::new();
    v.push_str("BEGIN:VCARD\n");
    v.push_str("VERSION:3.0\n");
    v.push_str(&format!("N:{};{}\n", fields.last_name, fields.first_name));
    v.push_str(&format!("FN:{} {}\n", fields.first_name, fields.last_name));
    for (label, value) in [
        ("ORG", &fields.org),
        ("TITLE", &fields.title),
        ("TEL", &fields.phone),
        ("EMAIL", &fields.email),
        ("ADR", &fields.address),
        ("URL", &fields.url),
    ] {
        if !value.trim().is_empty() {
            v.push_str(&format!("{label}:{value}\n"));
        }
    }
    v.push_str("END:VCARD\n");
    v
}
