//! Input parsing for hook JSON payloads
//!
//! Hosts send different shapes for different tools. [`HookInput`] is a
//! normalized view over all of them: every field is optional and a hook only
//! reads the ones it cares about. A field holding the wrong JSON type is
//! treated as absent, so a malformed field one hook ignores never stops
//! another hook from reading the fields it needs.

use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::HookError;

/// Placeholder some hosts send when a command has no description
const NO_DESCRIPTION: &str = "No description";

/// Main input structure from the host
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Edit", "Write")
    #[serde(default, deserialize_with = "lenient_string")]
    pub tool_name: Option<String>,

    /// Tool-specific input parameters
    #[serde(default, deserialize_with = "lenient_tool_input")]
    pub tool_input: ToolInput,

    /// Free-text prompt (prompt-submit events)
    #[serde(default, deserialize_with = "lenient_string")]
    pub prompt: Option<String>,

    /// Optional session identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default, deserialize_with = "lenient_string")]
    pub hook_event_name: Option<String>,
}

/// Union of the tool input fields hooks read
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_path: Option<String>,

    /// Full file body (Write)
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,

    /// Replacement text (Edit)
    #[serde(default, deserialize_with = "lenient_string")]
    pub new_string: Option<String>,

    /// Replacement operations (MultiEdit)
    #[serde(default, deserialize_with = "lenient_edits")]
    pub edits: Option<Vec<EditOperation>>,

    /// Shell command (Bash)
    #[serde(default, deserialize_with = "lenient_string")]
    pub command: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// One edit inside a multi-edit payload
#[derive(Debug, Default, Clone)]
pub struct EditOperation {
    pub new_string: String,
}

/// A string, or `None` for null and every other JSON type
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Tool input object; anything other than an object reads as empty
fn lenient_tool_input<'de, D>(deserializer: D) -> Result<ToolInput, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => ToolInput::deserialize(value).map_err(de::Error::custom),
        _ => Ok(ToolInput::default()),
    }
}

/// Edit list; entries that are not objects are skipped
fn lenient_edits<'de, D>(deserializer: D) -> Result<Option<Vec<EditOperation>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let edits = items
        .iter()
        .filter_map(Value::as_object)
        .map(|edit| EditOperation {
            new_string: edit
                .get("new_string")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();
    Ok(Some(edits))
}

/// Where the effective content of an edit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Content,
    NewString,
    Edits,
    None,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl HookInput {
    /// Parse input from JSON string.
    ///
    /// Fails only when the text is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, HookError> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::deserialize(Value::Object(object))?)
    }

    /// Target file path, if any
    pub fn file_path(&self) -> Option<&str> {
        non_empty(&self.tool_input.file_path)
    }

    /// Which field supplies the content: `content`, then `new_string`, then `edits`
    pub fn content_source(&self) -> ContentSource {
        let tool = &self.tool_input;
        if non_empty(&tool.content).is_some() {
            ContentSource::Content
        } else if non_empty(&tool.new_string).is_some() {
            ContentSource::NewString
        } else if tool.edits.as_ref().is_some_and(|e| !e.is_empty()) {
            ContentSource::Edits
        } else {
            ContentSource::None
        }
    }

    /// Effective content of the edit; empty when the payload carries none.
    ///
    /// Multi-edit replacement strings are joined with single spaces.
    pub fn content(&self) -> String {
        let tool = &self.tool_input;
        match self.content_source() {
            ContentSource::Content => tool.content.clone().unwrap_or_default(),
            ContentSource::NewString => tool.new_string.clone().unwrap_or_default(),
            ContentSource::Edits => tool
                .edits
                .iter()
                .flatten()
                .map(|e| e.new_string.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            ContentSource::None => String::new(),
        }
    }

    /// Shell command, if any
    pub fn command(&self) -> Option<&str> {
        non_empty(&self.tool_input.command)
    }

    /// Command description, ignoring the host placeholder
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.tool_input.description).filter(|d| *d != NO_DESCRIPTION)
    }

    /// Prompt text, if any
    pub fn prompt(&self) -> Option<&str> {
        non_empty(&self.prompt)
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        let tool = self.tool_name.as_deref().unwrap_or("-");
        if let Some(command) = self.command() {
            let truncated: String = command.chars().take(100).collect();
            let ellipsis = if truncated.len() < command.len() { "..." } else { "" };
            return format!("{}: {}{}", tool, truncated, ellipsis);
        }
        if let Some(path) = self.file_path() {
            return format!("{}: {}", tool, path);
        }
        if let Some(prompt) = self.prompt() {
            return format!("prompt ({} chars)", prompt.chars().count());
        }
        format!("{}: (no fields)", tool)
    }
}
