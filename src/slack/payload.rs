//! Block Kit payload for the hotfix notification.
//!
//! The serialized shape is a wire contract with the chat renderer; the
//! field names and block layout here must stay byte-for-byte stable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockText {
    PlainText { text: String },
    Mrkdwn { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Button {
        text: BlockText,
        url: String,
        action_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: BlockText,
    },
    Section {
        text: BlockText,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
}

/// One webhook message: header + body section + action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub blocks: Vec<Block>,
}

impl WebhookPayload {
    /// The fixed three-part hotfix announcement.
    ///
    /// `issue_url` is carried into the action button exactly as given.
    pub fn hotfix_created(release_tag: &str, hotfix_tag: &str, issue_url: &str) -> Self {
        Self {
            blocks: vec![
                Block::Header {
                    text: BlockText::PlainText {
                        text: format!("[{hotfix_tag}] Hotfix created"),
                    },
                },
                Block::Section {
                    text: BlockText::Mrkdwn {
                        text: format!("Please commit your fixes to hotfix/{release_tag}."),
                    },
                    accessory: Some(Accessory::Button {
                        text: BlockText::PlainText {
                            text: "Open issue".to_string(),
                        },
                        url: issue_url.to_string(),
                        action_id: "button-action".to_string(),
                    }),
                },
            ],
        }
    }

    /// URL of the first action button, if any.
    pub fn action_url(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Section {
                accessory: Some(Accessory::Button { url, .. }),
                ..
            } => Some(url.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_to_block_kit_wire_shape() {
        let payload = WebhookPayload::hotfix_created(
            "v2.3.0",
            "v2.3.0-hotfix",
            "https://github.com/acme/widget/issues/42",
        );

        let expected = json!({
            "blocks": [
                {
                    "type": "header",
                    "text": {
                        "type": "plain_text",
                        "text": "[v2.3.0-hotfix] Hotfix created"
                    }
                },
                {
                    "type": "section",
                    "text": {
                        "type": "mrkdwn",
                        "text": "Please commit your fixes to hotfix/v2.3.0."
                    },
                    "accessory": {
                        "type": "button",
                        "text": {
                            "type": "plain_text",
                            "text": "Open issue"
                        },
                        "url": "https://github.com/acme/widget/issues/42",
                        "action_id": "button-action"
                    }
                }
            ]
        });

        assert_eq!(serde_json::to_value(&payload).unwrap(), expected);
    }

    #[test]
    fn test_action_url_equals_issue_url_exactly() {
        let url = "https://github.com/acme/widget/issues/42";
        let payload = WebhookPayload::hotfix_created("v2.3.0", "v2.3.0-hotfix", url);
        assert_eq!(payload.action_url(), Some(url));
    }
}
