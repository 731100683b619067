//! Landing-page synthesis for payloads that cannot be embedded in a QR
//! symbol directly.
//!
//! Social-link bundles and hosted-image references are rendered into small
//! self-contained HTML documents; the QR code then encodes the page's URL
//! instead of the payload itself. Rendering is pure; the API layer owns
//! writing the documents to the page store.

use rand::Rng;

/// Social profile URLs for a "social" landing page. Blank fields are
/// skipped when rendering.
#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
}

/// Generate a collision-resistant page identifier:
/// `{unix_millis}-{random 0..10000}`.
///
/// Not cryptographically secure, and two requests in the same millisecond
/// with colliding suffixes could overwrite each other's page. Accepted
/// risk; there is no uniqueness check or retry.
pub fn page_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..10_000);
    format!("{millis}-{suffix}")
}

/// Extract the path component from a possibly-absolute image URL.
///
/// `http://host:9091/uploads/x.jpg` becomes `/uploads/x.jpg`; input without
/// a scheme separator (already a path) passes through unchanged, as does a
/// scheme-only URL with no path.
pub fn extract_image_path(image_url: &str) -> String {
    if let Some(scheme_end) = image_url.find("://") {
        let rest = &image_url[scheme_end + 3..];
        if let Some(slash) = rest.find('/') {
            return rest[slash..].to_string();
        }
    }
    image_url.to_string()
}

/// Render the social-links landing page.
///
/// Anchors are emitted in a fixed order (facebook, twitter, instagram,
/// linkedin), each only when its URL is non-blank, regardless of how the
/// request's payload map was ordered.
pub fn render_social_page(links: &SocialLinks) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset='utf-8'><meta name='viewport' content='width=device-width, initial-scale=1'>\n");
    html.push_str("<title>Social Links</title>\n<style>\n");
    html.push_str("body { font-family: Arial, sans-serif; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); min-height: 100vh; display: flex; align-items: center; justify-content: center; margin: 0; }\n");
    html.push_str(".container { background: white; border-radius: 16px; padding: 40px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); max-width: 400px; text-align: center; }\n");
    html.push_str("h1 { color: #333; margin-bottom: 30px; }\n");
    html.push_str(".social-links { display: flex; flex-direction: column; gap: 12px; }\n");
    html.push_str("a { padding: 14px 24px; border-radius: 8px; text-decoration: none; font-weight: 600; transition: all 0.3s ease; display: block; }\n");
    html.push_str("a:hover { transform: translateY(-2px); box-shadow: 0 10px 25px rgba(0,0,0,0.2); }\n");
    html.push_str(".facebook { background: #1877f2; color: white; }\n");
    html.push_str(".twitter { background: #000; color: white; }\n");
    html.push_str(".instagram { background: linear-gradient(45deg, #f09433 0%,#e6683c 25%,#dc2743 50%,#cc2366 75%,#bc1888 100%); color: white; }\n");
    html.push_str(".linkedin { background: #0a66c2; color: white; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<div class='container'>\n<h1>Follow Me</h1>\n<div class='social-links'>\n");

    for (url, class, label) in [
        (&links.facebook, "facebook", "Facebook"),
        (&links.twitter, "twitter", "Twitter / X"),
        (&links.instagram, "instagram", "Instagram"),
        (&links.linkedin, "linkedin", "LinkedIn"),
    ] {
        if !url.trim().is_empty() {
            html.push_str(&format!(
                "<a href='{url}' class='{class}' target='_blank'>{label}</a>\n"
            ));
        }
    }

    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Render the hosted-image landing page: a centered card with the image
/// and a download link, both pointing at `{base_url}{image_path}`.
pub fn render_image_page(base_url: &str, image_path: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset='utf-8'><meta name='viewport' content='width=device-width, initial-scale=1'>\n");
    html.push_str("<title>Image</title>\n<style>\n");
    html.push_str("* { margin: 0; padding: 0; box-sizing: border-box; }\n");
    html.push_str("body { font-family: Arial, sans-serif; background: #f0f0f0; min-height: 100vh; display: flex; align-items: center; justify-content: center; }\n");
    html.push_str(".container { background: white; border-radius: 12px; padding: 20px; box-shadow: 0 10px 40px rgba(0,0,0,0.2); max-width: 90vw; }\n");
    html.push_str("img { max-width: 100%; height: auto; border-radius: 8px; display: block; }\n");
    html.push_str(".download-btn { display: block; margin-top: 20px; padding: 12px 24px; background: #667eea; color: white; text-decoration: none; border-radius: 8px; text-align: center; font-weight: 600; transition: all 0.3s ease; }\n");
    html.push_str(".download-btn:hover { background: #764ba2; transform: translateY(-2px); }\n");
    html.push_str("</style>\n</head>\n<body>\n<div class='container'>\n");
    html.push_str(&format!(
        "<img src='{base_url}{image_path}' alt='QR Code Image'>\n"
    ));
    html.push_str(&format!(
        "<a href='{base_url}{image_path}' download class='download-btn'>Download Image</a>\n"
    ));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
