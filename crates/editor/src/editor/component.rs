//! Main QuillAI Editor component implementation.

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
/// ```rust
/// use dioxus::prelude::*;
/// use quillai_editor::QuillAIEditor;
///
/// fn App() -> Element {
///     rsx! {
///         QuillAIEditor {
///             placeholder: "Start typing...",
///             on_change: move |delta| {
///                 println!("Content changed: {}", delta);
///             }
///         }
///     }
/// }
/// ```
///
/// # Advanced Example
///
/// ```rust
/// use dioxus::prelude::*;
/// use quillai_editor::QuillAIEditor;
/// use std::collections::HashMap;
///
/// fn App() -> Element {
///     let mut custom_shortcuts = HashMap::new();
///     custom_shortcuts.insert("ctrl+u".to_string(), "underline".to_string());
///     
///     rsx! {
///         QuillAIEditor {
///             initial_content: Some("Welcome to QuillAI!".to_string()),
///             placeholder: "Type your message here...",
///             class: "my-editor",
///             custom_shortcuts: Some(custom_shortcuts),
///             on_change: move |delta| {
///                 // Handle content changes
///                 log::info!("Document updated: {}", delta);
///             },
///             on_selection_change: move |(start, end)| {
///                 // Handle selection changes
///                 log::info!("Selection: {} to {}", start, end);
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn QuillAIEditor(
    /// Initial content as Delta JSON or plain text.
    ///
    /// This prop allows you to pre-populate the editor with content. The content can be:
    /// - Plain text: Any string that will be inserted as-is
    /// - Delta JSON: A JSON string representing a Delta document (future feature)
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     initial_content: Some("Hello, world!".to_string())
    /// }
    /// ```
    /// 
    /// Note: Delta JSON parsing will be implemented when the Delta crate supports serde.
    #[props(default)]
    initial_content: Option<String>,
    
    /// Whether the editor is read-only.
    ///
    /// When set to `true`, the editor will display content but prevent all editing operations.
    /// Users can still select text and copy content, but cannot modify the document.
    /// This is useful for displaying formatted content or creating read-only previews.
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     readonly: true,
    ///     initial_content: Some("This content cannot be edited".to_string())
    /// }
    /// ```
    #[props(default = false)]
    readonly: bool,
    
    /// Placeholder text when editor is empty.
    ///
    /// This text will be displayed in a muted style when the editor has no content,
    /// providing a hint to users about what they can type. The placeholder disappears
    /// as soon as the user starts typing.
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     placeholder: Some("Start writing your story...".to_string())
    /// }
    /// ```
    #[props(default)]
    placeholder: Option<String>,
    
    /// Custom CSS class for styling.
    ///
    /// This class will be applied to the root editor element, allowing you to customize
    /// the appearance of the editor. You can use this to apply themes, adjust sizing,
    /// or integrate with your application's design system.
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     class: Some("my-custom-editor dark-theme".to_string())
    /// }
    /// ```
    #[props(default)]
    class: Option<String>,
    
    /// Callback when content changes.
    ///
    /// This callback is fired whenever the document content changes,
    /// providing the updated Delta representation as a JSON string.
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     on_change: move |delta_json: String| {
    ///         println!("Document changed: {}", delta_json);
    ///         // Parse delta_json if needed for further processing
    ///     }
    /// }
    /// ```
    #[props(default)]
    on_change: Option<EventHandler<String>>,
    
    /// Callback when selection changes.
    ///
    /// This callback is fired when the user's text selection or cursor position changes.
    /// The tuple contains (start_index, end_index) where both values represent character
    /// positions in the document. When start_index == end_index, it represents a cursor position.
    /// 
    /// # Example
    /// ```rust
    /// QuillAIEditor {
    ///     on_selection_change: move |(start, end): (usize, usize)| {
    ///         if start == end {
    ///             println!("Cursor at position: {}", start);
    ///         } else {
    ///             println!("Selection from {} to {}", start, end);
    ///         }
    ///     }
    /// }
    /// ```
    #[props(default)]
    on_selection_change: Option<EventHandler<(usize, usize)>>,
    
    /// Custom keyboard shortcuts.
    ///
    /// Allows overriding or adding custom keyboard shortcuts beyond the default ones.
    /// The key is a string representation of the shortcut (e.g., "ctrl+b", "cmd+i"),
    /// and the value is the action name (e.g., "bold", "italic").
    /// 
    /// # Shortcut Format
    /// - Use "ctrl" for Control key on Windows/Linux, "cmd" for Command key on Mac
    /// - Use "shift" for Shift key
    /// - Use "alt" for Alt key
    /// - Combine with "+" (e.g., "ctrl+shift+z")
    /// - Single keys: "a", "1", "escape", "enter", "backspace"
    /// 
    /// # Example
    /// ```rust
    /// use std::collections::HashMap;
    /// 
    /// let mut shortcuts = HashMap::new();
    /// shortcuts.insert("ctrl+u".to_string(), "underline".to_string());
    /// shortcuts.insert("ctrl+shift+h".to_string(), "highlight".to_string());
    /// 
    /// QuillAIEditor {
    ///     custom_shortcuts: Some(shortcuts)
    /// }
    /// ```
    #[props(default)]
    custom_shortcuts: Option<HashMap<String, String>>,
) -> Element {
    // TODO: Implement component logic in subsequent sub-tasks
    // For now, just show a placeholder
    let _ = (initial_content, readonly, placeholder, class, on_change, on_selection_change, custom_shortcuts);
    
    rsx! {
        div {
            class: "quillai-editor",
            "QuillAI Editor - Coming Soon"
        }
    }
}