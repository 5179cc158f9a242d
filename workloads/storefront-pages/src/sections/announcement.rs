//! Announcement bar with the promotion countdown.

use storefront_core::countdown::CountdownTick;

use super::escape_html;
use crate::data::AnnouncementContent;

/// Render the announcement bar.
///
/// `countdown` is `None` when the promotion has no usable expiry; the bar
/// then shows the message alone.
pub fn render_announcement(content: &AnnouncementContent, countdown: Option<&CountdownTick>) -> String {
    let timer = countdown.map(render_countdown).unwrap_or_default();

    format!(
        r#"<section class="announcement" data-section="announcement">
    <p class="announcement-message">{message}</p>{timer}
</section>"#,
        message = escape_html(&content.message),
        timer = timer
    )
}

/// Render the four countdown fields. The seconds digit carries the blink
/// color for the current tick.
pub fn render_countdown(tick: &CountdownTick) -> String {
    let remaining = &tick.remaining;
    format!(
        r#"
    <div class="countdown" data-expired="{expired}">
        <span class="countdown-days">{days}d</span>
        <span class="countdown-hours">{hours:02}h</span>
        <span class="countdown-minutes">{minutes:02}m</span>
        <span class="countdown-seconds" style="color: {color}">{seconds:02}s</span>
    </div>"#,
        expired = remaining.is_expired(),
        days = remaining.days,
        hours = remaining.hours,
        minutes = remaining.minutes,
        seconds = remaining.seconds,
        color = tick.visibility.css_color()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_countdown_fields_and_blink() {
        let now = Utc.with_ymd_and_hms(2023, 9, 18, 22, 58, 59).unwrap();
        let target = Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();
        let tick = CountdownTick::at(Some(target), now);

        let html = render_countdown(&tick);
        assert!(html.contains(r#"<span class="countdown-hours">01h</span>"#));
        assert!(html.contains(r#"<span class="countdown-minutes">01m</span>"#));
        assert!(html.contains(r#"style="color: transparent">01s"#));
    }

    #[test]
    fn test_message_only_without_countdown() {
        let content = AnnouncementContent::new("Free <b>returns</b>", None);
        let html = render_announcement(&content, None);

        assert!(html.contains("Free &lt;b&gt;returns&lt;/b&gt;"));
        assert!(!html.contains("countdown"));
    }
}
