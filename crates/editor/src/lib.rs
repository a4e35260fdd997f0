#![allow(unused_variables)]
use dioxus::prelude::*;
use std::collections::HashMap;

/// The main QuillAI Editor component.
///
/// This component provides a rich text editing interface with keyboard-driven formatting.
/// It integrates with the Delta format for document representation and Parchment for
/// DOM state management.
///
/// # Features
///
/// - **Keyboard-driven formatting**: Bold (Ctrl+B), Italic (Ctrl+I), and more
/// - **Real-time change tracking**: Delta-based document representation
/// - **Customizable shortcuts**: Override or add custom keyboard shortcuts
/// - **Read-only mode**: Display content without allowing edits
/// - **Placeholder support**: Guide users with helpful placeholder text
/// - **Event callbacks**: React to content and selection changes
///
/// # Basic Example
///
/// ```rust,ignore
/// use dioxus::prelude::*;
/// use quillai_editor::component as quillai_editor_component;
///
/// fn app() -> Element {
///     rsx! {
///         quillai_editor_component {
///             placeholder: Some("Start writing...".to_string()),
///             on_change: move |delta_json: String| {
///                 println!("Document updated: {}", delta_json);
///             },
///             on_selection_change: move |(start, end): (usize, usize)| {
///                 println!("Selection: {} to {}", start, end);
///             }
///         }
///     }
/// }
/// ```
///
/// # Advanced Example
///
/// ```rust,ignore
/// use dioxus::prelude::*;
/// use quillai_editor::component as quillai_editor_component;
/// use std::collections::HashMap;
///
/// fn app() -> Element {
///     let mut custom_shortcuts = HashMap::new();
///     custom_shortcuts.insert("ctrl+u".to_string(), "underline".to_string());
///
///     rsx! {
///         quillai_editor_component {
///             initial_content: Some("Welcome to QuillAI!".to_string()),
///             placeholder: Some("Type your message here...".to_string()),
///             class: Some("my-editor".to_string()),
///             custom_shortcuts: Some(custom_shortcuts),
///             on_change: move |delta| {
///                 // Handle content changes
///                 println!("Document updated: {}", delta);
///             },
///             on_selection_change: move |(start, end)| {
///                 // Handle selection changes
///                 println!("Selection: {} to {}", start, end);
///             }
///         }
///     }
/// }
/// ```
pub fn component(
    initial_content: Option<String>,
    readonly: Option<bool>,
    placeholder: Option<String>,
    class: Option<String>,
    on_change: Option<EventHandler<String>>,
    on_selection_change: Option<EventHandler<(usize, usize)>>,
    custom_shortcuts: Option<HashMap<String, String>>,
) -> Element {
    todo!()
}

