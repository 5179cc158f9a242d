//! HTML section renderers.
//!
//! Each renderer is a pure function from loaded data to an HTML fragment.

mod announcement;
mod complete_the_look;
mod product;
mod recommendations;
mod shipping;
mod swimlane;

pub use announcement::*;
pub use complete_the_look::*;
pub use product::*;
pub use recommendations::*;
pub use shipping::*;
pub use swimlane::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
