//! Widget tree model
//!
//! A screen is a tree of named [`Element`]s. Each element wraps one
//! [`Widget`] variant and may opt into automatic translation by carrying a
//! [`Translatable`] attachment.

use langpack_common::LanguageCode;
use langpack_i18n::DEFAULT_CATEGORY;

/// Translation attachment: which catalog entry supplies an element's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translatable {
    /// Key inside the category
    pub key: String,
    /// Catalog category, [`DEFAULT_CATEGORY`] when `None`
    pub category: Option<String>,
}

impl Translatable {
    /// Attachment for `key` in the default category
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            category: None,
        }
    }

    /// Attachment for `key` in an explicit category
    pub fn in_category(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            category: Some(category.into()),
        }
    }

    /// The category to look the key up in
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Widgets whose visible text can be replaced
pub trait TextDisplay {
    /// Current text
    fn text(&self) -> &str;

    /// Replace the displayed text
    fn set_text(&mut self, text: String);
}

/// A push button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    text: String,
}

/// A static text label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
}

/// A labelled on/off switch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggle {
    text: String,
    /// Whether the switch is on
    pub pressed: bool,
}

macro_rules! text_widget {
    ($($widget:ident),+) => {
        $(
            impl $widget {
                /// Create the widget with initial text
                pub fn new(text: impl Into<String>) -> Self {
                    let mut widget = Self::default();
                    widget.text = text.into();
                    widget
                }
            }

            impl TextDisplay for $widget {
                fn text(&self) -> &str {
                    &self.text
                }

                fn set_text(&mut self, text: String) {
                    self.text = text;
                }
            }
        )+
    };
}

text_widget!(Button, Label, Toggle);

/// One entry of an [`OptionList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Displayed text
    pub text: String,
    /// Language the entry stands for
    pub value: LanguageCode,
}

impl OptionItem {
    /// Create an entry
    pub fn new(text: impl Into<String>, value: LanguageCode) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// A drop-down of choices with at most one selected.
///
/// The list itself has no single text, so it is never a translation target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    items: Vec<OptionItem>,
    selected: Option<usize>,
}

impl OptionList {
    /// Remove every entry and the selection
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// Append an entry and return its index
    pub fn push(&mut self, item: OptionItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Select the entry at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Index of the selected entry
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry
    pub fn selected_item(&self) -> Option<&OptionItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Entry at `index`
    pub fn item(&self, index: usize) -> Option<&OptionItem> {
        self.items.get(index)
    }

    /// All entries, in display order
    pub fn items(&self) -> &[OptionItem] {
        &self.items
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The closed set of widget kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Layout node without content
    Container,
    /// Push button
    Button(Button),
    /// Text label
    Label(Label),
    /// On/off switch
    Toggle(Toggle),
    /// Choice list
    OptionList(OptionList),
}

impl Widget {
    /// The widget's text capability, if it has one
    pub fn text_display(&self) -> Option<&dyn TextDisplay> {
        match self {
            Self::Button(button) => Some(button),
            Self::Label(label) => Some(label),
            Self::Toggle(toggle) => Some(toggle),
            Self::Container | Self::OptionList(_) => None,
        }
    }

    /// Mutable text capability, if the widget has one
    pub fn text_display_mut(&mut self) -> Option<&mut dyn TextDisplay> {
        match self {
            Self::Button(button) => Some(button),
            Self::Label(label) => Some(label),
            Self::Toggle(toggle) => Some(toggle),
            Self::Container | Self::OptionList(_) => None,
        }
    }

    /// Short kind name for diagnostics
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Button(_) => "button",
            Self::Label(_) => "label",
            Self::Toggle(_) => "toggle",
            Self::OptionList(_) => "option_list",
        }
    }
}

/// A named node of the widget tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    widget: Widget,
    translatable: Option<Translatable>,
    children: Vec<Element>,
}

impl Element {
    /// Create a childless element
    pub fn new(name: impl Into<String>, widget: Widget) -> Self {
        Self {
            name: name.into(),
            widget,
            translatable: None,
            children: Vec::new(),
        }
    }

    /// Create a layout container
    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, Widget::Container)
    }

    /// Attach translation metadata
    #[must_use]
    pub fn translatable(mut self, tag: Translatable) -> Self {
        self.translatable = Some(tag);
        self
    }

    /// Append a child
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child in place
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Element name, unique among its siblings
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped widget
    pub const fn widget(&self) -> &Widget {
        &self.widget
    }

    /// The wrapped widget, mutably
    pub fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    /// Translation metadata, if any
    pub const fn translation(&self) -> Option<&Translatable> {
        self.translatable.as_ref()
    }

    /// Direct children, in order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Displayed text, for widgets that have one
    pub fn text(&self) -> Option<&str> {
        self.widget.text_display().map(TextDisplay::text)
    }

    /// Descendant at a `/`-separated path of names, relative to this
    /// element. The empty path is the element itself.
    pub fn find(&self, path: &str) -> Option<&Self> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children.iter().find(|child| child.name == segment)
            })
    }

    /// Mutable variant of [`Self::find`]
    pub fn find_mut(&mut self, path: &str) -> Option<&mut Self> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children.iter_mut().find(|child| child.name == segment)
            })
    }

    /// Visit this element and every descendant in pre-order together with
    /// its path relative to this element.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Self),
    {
        self.walk_inner(String::new(), &mut visit);
    }

    fn walk_inner<F>(&self, path: String, visit: &mut F)
    where
        F: FnMut(&str, &Self),
    {
        visit(&path, self);
        for child in &self.children {
            let child_path = if path.is_empty() {
                child.name.clone()
            } else {
                format!("{path}/{}", child.name)
            };
            child.walk_inner(child_path, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::container("Root").child(
            Element::container("Box")
                .child(Element::new("Ok", Widget::Button(Button::new("OK"))))
                .child(Element::new("Hint", Widget::Label(Label::new("hint")))),
        )
    }

    #[test]
    fn test_translatable_default_category() {
        assert_eq!(Translatable::new("quit").category(), "main_menu");
        assert_eq!(
            Translatable::in_category("settings", "fullscreen").category(),
            "settings"
        );
    }

    #[test]
    fn test_find_by_path() {
        let mut root = sample();
        assert_eq!(root.find("Box/Ok").and_then(Element::text), Some("OK"));
        assert_eq!(root.find("").map(Element::name), Some("Root"));
        assert!(root.find("Box/Missing").is_none());

        if let Some(Widget::Label(label)) = root.find_mut("Box/Hint").map(Element::widget_mut) {
            label.set_text("changed".to_string());
        }
        assert_eq!(root.find("Box/Hint").and_then(Element::text), Some("changed"));
    }

    #[test]
    fn test_walk_is_pre_order() {
        let mut paths = Vec::new();
        sample().walk(|path, _| paths.push(path.to_string()));
        assert_eq!(paths, vec!["", "Box", "Box/Ok", "Box/Hint"]);
    }

    #[test]
    fn test_text_capability_by_kind() {
        assert!(Widget::Container.text_display().is_none());
        assert!(Widget::OptionList(OptionList::default()).text_display().is_none());
        assert_eq!(
            Widget::Toggle(Toggle::new("On")).text_display().map(TextDisplay::text),
            Some("On")
        );
    }

    #[test]
    fn test_option_list_selection() {
        let mut list = OptionList::default();
        let first = list.push(OptionItem::new("English (EN)", LanguageCode::new("en")));
        list.push(OptionItem::new("한국어 (KO)", LanguageCode::new("ko")));

        assert!(list.select(first));
        assert!(!list.select(5));
        assert_eq!(list.selected_item().map(|item| item.value.as_str()), Some("en"));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.selected(), None);
    }
}
