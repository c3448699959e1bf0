//! Catalogue options and their physical components.

use serde::{Deserialize, Serialize};

/// One printable component of a subject option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// The core (main) book.
    Core,
    /// The companion workbook.
    Work,
    /// An optional add-on book.
    Addon,
}

impl Component {
    /// All components in derivation order.
    pub const ALL: [Component; 3] = [Component::Core, Component::Work, Component::Addon];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Component::Core => "Core",
            Component::Work => "Workbook",
            Component::Addon => "Add-on",
        }
    }

    /// Short lowercase name used in keys and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Component::Core => "core",
            Component::Work => "work",
            Component::Addon => "addon",
        }
    }
}

impl std::str::FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(Component::Core),
            "work" | "workbook" => Ok(Component::Work),
            "addon" | "add-on" | "add_on" => Ok(Component::Addon),
            _ => Err(format!("Unknown component: {}. Use core, work, or addon.", s)),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// An option offered by the catalogue for one subject of one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectOption {
    /// Identifier unique within the class and subject.
    pub type_id: String,

    /// Display label (series or book name).
    pub label: String,

    /// Catalogue code of the core book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_id: Option<String>,

    /// Catalogue code of the workbook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_id: Option<String>,

    /// Catalogue code of the add-on book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_spine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_spine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_spine: Option<String>,

    /// Default printed cover title of the core book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_cover: Option<String>,

    /// Default printed cover title of the workbook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_cover: Option<String>,

    /// Default printed cover title of the add-on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_cover: Option<String>,

    /// Preview document links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_link: Option<String>,

    /// Subject name to display instead of the record's subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_subject: Option<String>,

    /// Set on options the operator authored by hand.
    #[serde(default)]
    pub is_custom: bool,
}

impl SubjectOption {
    /// Create an option with only a type id and label.
    pub fn new(type_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the core book code.
    pub fn with_core(mut self, id: impl Into<String>) -> Self {
        self.core_id = Some(id.into());
        self
    }

    /// Set the workbook code.
    pub fn with_work(mut self, id: impl Into<String>) -> Self {
        self.work_id = Some(id.into());
        self
    }

    /// Set the add-on code.
    pub fn with_addon(mut self, id: impl Into<String>) -> Self {
        self.add_on_id = Some(id.into());
        self
    }

    /// Set the spine code of a component.
    pub fn with_spine(mut self, component: Component, spine: impl Into<String>) -> Self {
        let spine = Some(spine.into());
        match component {
            Component::Core => self.core_spine = spine,
            Component::Work => self.work_spine = spine,
            Component::Addon => self.add_on_spine = spine,
        }
        self
    }

    /// Set the default cover title of a component.
    pub fn with_cover(mut self, component: Component, cover: impl Into<String>) -> Self {
        let cover = Some(cover.into());
        match component {
            Component::Core => self.core_cover = cover,
            Component::Work => self.work_cover = cover,
            Component::Addon => self.add_on_cover = cover,
        }
        self
    }

    /// Set the preview link of a component.
    pub fn with_link(mut self, component: Component, link: impl Into<String>) -> Self {
        let link = Some(link.into());
        match component {
            Component::Core => self.core_link = link,
            Component::Work => self.work_link = link,
            Component::Addon => self.add_on_link = link,
        }
        self
    }

    /// Set the display subject override.
    pub fn with_json_subject(mut self, subject: impl Into<String>) -> Self {
        self.json_subject = Some(subject.into());
        self
    }

    /// Catalogue code of a component, if the option has one.
    pub fn component_id(&self, component: Component) -> Option<&str> {
        match component {
            Component::Core => self.core_id.as_deref(),
            Component::Work => self.work_id.as_deref(),
            Component::Addon => self.add_on_id.as_deref(),
        }
    }

    /// Whether the option prints this component at all.
    pub fn has_component(&self, component: Component) -> bool {
        self.component_id(component).is_some()
    }

    pub fn spine(&self, component: Component) -> Option<&str> {
        match component {
            Component::Core => self.core_spine.as_deref(),
            Component::Work => self.work_spine.as_deref(),
            Component::Addon => self.add_on_spine.as_deref(),
        }
    }

    pub fn cover(&self, component: Component) -> Option<&str> {
        match component {
            Component::Core => self.core_cover.as_deref(),
            Component::Work => self.work_cover.as_deref(),
            Component::Addon => self.add_on_cover.as_deref(),
        }
    }

    pub fn preview_link(&self, component: Component) -> Option<&str> {
        match component {
            Component::Core => self.core_link.as_deref(),
            Component::Work => self.work_link.as_deref(),
            Component::Addon => self.add_on_link.as_deref(),
        }
    }

    /// Whether this option was authored by hand rather than taken from the catalogue.
    ///
    /// Matches either the manual id namespace or the literal "Custom" label.
    pub fn is_manual(&self, manual_prefix: &str) -> bool {
        self.type_id.starts_with(manual_prefix) || self.label == "Custom"
    }
}

/// The catalogue's ordered options for one subject of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectOffering {
    /// Subject name as the catalogue spells it.
    pub subject: String,

    /// Options in catalogue order.
    pub options: Vec<SubjectOption>,
}

impl SubjectOffering {
    /// Find an option by type id.
    pub fn option(&self, type_id: &str) -> Option<&SubjectOption> {
        self.options.iter().find(|o| o.type_id == type_id)
    }
}
