use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{WireError, null_as_default};
use crate::model::{Block, BlockId, BlockKind, BlockType, RichText};

/// The per-type payload object stored under the block's type key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<RichText>,
    /// Present only for `to_do` blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// One block as it appears in the wire format.
///
/// Serialized by hand because the payload's key is the value of `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawWireBlock")]
pub struct WireBlock {
    pub id: BlockId,
    pub block_type: BlockType,
    pub payload: Option<WirePayload>,
    pub children: Vec<WireBlock>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
}

impl Serialize for WireBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let empty = WirePayload::default();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.block_type)?;
        map.serialize_entry(self.block_type.as_str(), self.payload.as_ref().unwrap_or(&empty))?;
        map.serialize_entry("children", &self.children)?;
        if let Some(created) = &self.created_time {
            map.serialize_entry("created_time", created)?;
        }
        if let Some(edited) = &self.last_edited_time {
            map.serialize_entry("last_edited_time", edited)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct RawWireBlock {
    #[serde(default = "BlockId::generate")]
    id: BlockId,
    #[serde(rename = "type")]
    block_type: BlockType,
    #[serde(default, deserialize_with = "null_as_default")]
    children: Vec<WireBlock>,
    #[serde(default)]
    created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    last_edited_time: Option<DateTime<Utc>>,
    /// Holds the type-keyed payload plus `object` and anything unknown.
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<RawWireBlock> for WireBlock {
    type Error = serde_json::Error;

    fn try_from(mut raw: RawWireBlock) -> Result<Self, Self::Error> {
        let payload = match raw.rest.remove(raw.block_type.as_str()) {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(WireBlock {
            id: raw.id,
            block_type: raw.block_type,
            payload,
            children: raw.children,
            created_time: raw.created_time,
            last_edited_time: raw.last_edited_time,
        })
    }
}

/// Converts blocks to their wire form. `checked` is only emitted for to-dos.
pub fn to_wire(blocks: &[Block]) -> Vec<WireBlock> {
    blocks.iter().map(block_to_wire).collect()
}

fn block_to_wire(block: &Block) -> WireBlock {
    let checked = match block.kind {
        BlockKind::ToDo { checked } => Some(checked),
        _ => None,
    };
    WireBlock {
        id: block.id.clone(),
        block_type: block.block_type(),
        payload: Some(WirePayload {
            rich_text: block.content.clone(),
            checked,
        }),
        children: to_wire(&block.children),
        created_time: Some(block.created_time),
        last_edited_time: Some(block.last_edited_time),
    }
}

/// Converts wire blocks back into the tree. Never fails; see the module
/// docs for how missing fields are filled in.
pub fn from_wire(objects: &[WireBlock]) -> Vec<Block> {
    blocks_from_wire(objects, Utc::now())
}

fn blocks_from_wire(objects: &[WireBlock], imported_at: DateTime<Utc>) -> Vec<Block> {
    objects
        .iter()
        .map(|object| {
            let payload = object.payload.as_ref();
            let kind = match object.block_type {
                BlockType::ToDo => BlockKind::ToDo {
                    checked: payload.and_then(|p| p.checked).unwrap_or(false),
                },
                other => other.into(),
            };
            Block {
                id: object.id.clone(),
                kind,
                content: payload.map(|p| p.rich_text.clone()).unwrap_or_default(),
                children: blocks_from_wire(&object.children, imported_at),
                created_time: object.created_time.unwrap_or(imported_at),
                last_edited_time: object.last_edited_time.unwrap_or(imported_at),
            }
        })
        .collect()
}

/// Serializes blocks as a pretty-printed JSON array of wire blocks.
pub fn to_wire_json(blocks: &[Block]) -> Result<String, WireError> {
    Ok(serde_json::to_string_pretty(&to_wire(blocks))?)
}

/// Parses a JSON array of wire blocks.
pub fn from_wire_json(json: &str) -> Result<Vec<Block>, WireError> {
    let objects: Vec<WireBlock> = serde_json::from_str(json)?;
    log::debug!("decoded {} root wire blocks", objects.len());
    Ok(from_wire(&objects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotations, Color, Style};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn todo_carries_checked() {
        let block = Block::new(BlockType::ToDo, "x").with_checked(true);
        let value = serde_json::to_value(to_wire(&[block.clone()])).unwrap();
        let object = &value[0];

        assert_eq!(object["object"], "block");
        assert_eq!(object["type"], "to_do");
        assert_eq!(object["id"], block.id.as_str());
        assert_eq!(object["to_do"]["checked"], true);
        assert_eq!(object["to_do"]["rich_text"][0]["text"]["content"], "x");
        assert_eq!(object["to_do"]["rich_text"][0]["text"]["link"], json!(null));
        assert_eq!(object["children"], json!([]));
    }

    #[test]
    fn non_todo_has_no_checked_key() {
        let value = serde_json::to_value(to_wire(&[Block::new(BlockType::Heading2, "h")])).unwrap();
        let payload = value[0]["heading_2"].as_object().unwrap();
        assert!(!payload.contains_key("checked"));
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let mut run = RichText::plain("link").with_link("https://example.com");
        run.annotations = Annotations {
            underline: true,
            color: Color::Purple,
            ..Annotations::only(Style::Italic)
        };
        let mut block = Block::new(BlockType::Toggle, "t");
        block.content.push(run);
        let forest = vec![block.with_children(vec![
            Block::new(BlockType::ToDo, "c").with_checked(true),
            Block::new(BlockType::Code, "`x`"),
        ])];

        let json = to_wire_json(&forest).unwrap();
        assert_eq!(from_wire_json(&json).unwrap(), forest);
        assert_eq!(from_wire(&to_wire(&forest)), forest);
    }

    #[test]
    fn missing_fields_are_filled_in() {
        let json = json!([
            { "id": "a", "type": "to_do" },
            { "id": "b", "type": "paragraph", "paragraph": { "rich_text": null }, "children": null },
            { "id": "c", "type": "heading_1", "heading_1": {
                "rich_text": [{ "text": { "content": "Hi" } }],
                "checked": true
            }},
            { "id": "d", "type": "paragraph", "paragraph": {
                "rich_text": [{ "type": "text", "text": { "content": "Bare" }, "annotations": null }]
            }}
        ])
        .to_string();

        let blocks = from_wire_json(&json).unwrap();
        assert_eq!(blocks[0].kind, BlockKind::ToDo { checked: false });
        assert!(blocks[0].content.is_empty());
        assert!(blocks[1].content.is_empty());
        assert!(blocks[1].children.is_empty());
        assert_eq!(blocks[2].kind, BlockKind::Heading1);
        assert_eq!(blocks[2].content, vec![RichText::plain("Hi")]);
        assert_eq!(blocks[3].content, vec![RichText::plain("Bare")]);
        assert_eq!(blocks[0].created_time, blocks[0].last_edited_time);
    }

    #[test]
    fn ids_and_timestamps_are_kept_verbatim() {
        let json = json!([{
            "object": "block",
            "id": "anything goes",
            "type": "paragraph",
            "paragraph": { "rich_text": [] },
            "created_time": "2024-01-02T03:04:05Z",
            "last_edited_time": "2024-02-03T04:05:06.789Z",
            "has_children": false
        }])
        .to_string();

        let blocks = from_wire_json(&json).unwrap();
        assert_eq!(blocks[0].id.as_str(), "anything goes");
        assert_eq!(blocks[0].created_time.to_rfc3339(), "2024-01-02T03:04:05+00:00");
        assert_eq!(
            blocks[0].last_edited_time.timestamp_millis(),
            DateTime::parse_from_rfc3339("2024-02-03T04:05:06.789Z")
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = from_wire_json(r#"[{"id":"x","type":"table"}]"#).unwrap_err();
        assert!(err.to_string().contains("table"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(from_wire_json("{not json"), Err(WireError::Json(_))));
    }

    #[test]
    fn nested_children_decode() {
        let json = json!([{
            "id": "p", "type": "toggle",
            "children": [{ "id": "c", "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [{ "type": "text", "text": { "content": "kid" } }] } }]
        }])
        .to_string();
        let blocks = from_wire_json(&json).unwrap();
        assert_eq!(blocks[0].children[0].plain_text(), "kid");
        assert_eq!(blocks[0].children[0].block_type(), BlockType::BulletedListItem);
    }
}
