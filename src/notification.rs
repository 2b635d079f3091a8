use serde::Serialize;
use serde_json::{Map, Value};

/// Display payload for the `notification` block of an FCM message.
///
/// Values pass through unvalidated; the delivery API is the authority on
/// what it accepts. Empty text and a zero badge count are treated as
/// unset and left out of the wire format, with `body` always emitted.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "text_is_falsy")]
    title: Option<String>,
    body: String,
    #[serde(skip_serializing_if = "badge_is_falsy")]
    badge: Option<i64>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    click_action: Option<String>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    sound: Option<String>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    color: Option<String>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "text_is_falsy")]
    image: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
            badge: None,
            icon: None,
            click_action: None,
            sound: None,
            color: None,
            tag: None,
            image: None,
        }
    }

    /// Android only; also shown on iOS watches.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Main content of the notification (Android and iOS).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// iOS only: unread count bubble on the app icon.
    /// Passed through as-is, negative values included.
    pub fn badge(mut self, badge: i64) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Android only: drawable resource name, without the `.xml` suffix.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Android only: background color of the notification icon, in
    /// `#rrggbb` format. The syntax is not checked here.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Behavior on tap: an intent name on Android, a category in the
    /// APNs payload on iOS. When empty, Android launches the default
    /// activity with the payload passed in an intent.
    pub fn click_action(mut self, action_name: impl Into<String>) -> Self {
        self.click_action = Some(action_name.into());
        self
    }

    /// Android only: replaces an earlier notification carrying the same
    /// tag instead of stacking a new one.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Image URL or resource path shown with the notification.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// `"default"` or the filename of a sound resource bundled in the app.
    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Ordered wire mapping for the notification block.
    ///
    /// `body` is always present; every other field is present only when
    /// set and non-empty (non-zero for `badge`). Pure read, builds a
    /// fresh mapping each call.
    pub fn to_wire_format(&self) -> Map<String, Value> {
        let mut fields = Map::new();

        if let Some(title) = truthy_text(&self.title) {
            fields.insert("title".to_string(), Value::from(title));
        }

        fields.insert("body".to_string(), Value::from(self.body.as_str()));

        if let Some(badge) = self.badge.filter(|badge| *badge != 0) {
            fields.insert("badge".to_string(), Value::from(badge));
        }
        if let Some(icon) = truthy_text(&self.icon) {
            fields.insert("icon".to_string(), Value::from(icon));
        }
        if let Some(click_action) = truthy_text(&self.click_action) {
            fields.insert("click_action".to_string(), Value::from(click_action));
        }
        if let Some(sound) = truthy_text(&self.sound) {
            fields.insert("sound".to_string(), Value::from(sound));
        }
        if let Some(color) = truthy_text(&self.color) {
            fields.insert("color".to_string(), Value::from(color));
        }
        if let Some(tag) = truthy_text(&self.tag) {
            fields.insert("tag".to_string(), Value::from(tag));
        }
        if let Some(image) = truthy_text(&self.image) {
            fields.insert("image".to_string(), Value::from(image));
        }

        fields
    }
}

fn truthy_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn text_is_falsy(value: &Option<String>) -> bool {
    truthy_text(value).is_none()
}

fn badge_is_falsy(value: &Option<i64>) -> bool {
    value.is_none_or(|badge| badge == 0)
}
