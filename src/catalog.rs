//! Static registry of node kinds.
//!
//! Each kind has one catalog entry (palette metadata) and one field schema
//! (which configuration fields the properties panel shows). Adding a kind
//! means adding an enum variant, one entry, and one schema; the exhaustive
//! matches below make the compiler point at anything missed.

use eframe::egui::Color32;

use crate::types::NodeKind;

/// Descriptive metadata for one node kind, shown in the palette and on
/// placed nodes.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// The kind this entry describes
    pub kind: NodeKind,
    /// Display label; also the default label of newly placed nodes
    pub label: &'static str,
    /// Short glyph drawn on palette cards and node boxes
    pub icon: &'static str,
    /// Accent color for palette cards, node borders, and ports
    pub color: Color32,
    /// One-line description shown on the palette card
    pub description: &'static str,
}

/// How a configuration field is edited in the properties panel.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Multiline,
    /// Dropdown over (stored value, display label) pairs
    Select(&'static [(&'static str, &'static str)]),
    /// Independent toggles over (stored value, display label) pairs; the
    /// checked values are stored as a string list
    Checklist(&'static [(&'static str, &'static str)]),
}

/// One configuration field in a kind's schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Property key the field reads and writes
    pub key: &'static str,
    /// Label shown above the field
    pub label: &'static str,
    /// Hint text while empty; for selects, the placeholder option text
    pub hint: &'static str,
    /// Which widget edits this field
    pub kind: FieldKind,
}

// Catalog entries
const DATA_SOURCE: CatalogEntry = CatalogEntry {
    kind: NodeKind::DataSource,
    label: "Data Source",
    icon: "📥",
    color: Color32::from_rgb(59, 130, 246),
    description: "Connect to external data sources",
};

const CALCULATION: CatalogEntry = CatalogEntry {
    kind: NodeKind::Calculation,
    label: "Calculation Step",
    icon: "➕",
    color: Color32::from_rgb(168, 85, 247),
    description: "Perform mathematical operations",
};

const VALIDATION: CatalogEntry = CatalogEntry {
    kind: NodeKind::Validation,
    label: "Validation",
    icon: "✓",
    color: Color32::from_rgb(34, 197, 94),
    description: "Validate data quality and rules",
};

const CONDITION: CatalogEntry = CatalogEntry {
    kind: NodeKind::Condition,
    label: "Conditional Logic",
    icon: "🔀",
    color: Color32::from_rgb(234, 179, 8),
    description: "Add branching logic to workflow",
};

const OUTPUT: CatalogEntry = CatalogEntry {
    kind: NodeKind::Output,
    label: "Output",
    icon: "📤",
    color: Color32::from_rgb(239, 68, 68),
    description: "Define output destination",
};

// Field schemas
const DATA_SOURCE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "sourceType",
        label: "Data Source Type",
        hint: "Select type...",
        kind: FieldKind::Select(&[
            ("database", "Database"),
            ("api", "REST API"),
            ("file", "File Upload"),
            ("webhook", "Webhook"),
        ]),
    },
    FieldSpec {
        key: "connectionString",
        label: "Connection String",
        hint: "Enter connection details...",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "query",
        label: "Query/Endpoint",
        hint: "Enter SQL query or API endpoint...",
        kind: FieldKind::Multiline,
    },
];

const CALCULATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "calculationType",
        label: "Calculation Type",
        hint: "Select calculation...",
        kind: FieldKind::Select(&[
            ("sum", "Sum"),
            ("average", "Average"),
            ("count", "Count"),
            ("custom", "Custom Formula"),
        ]),
    },
    FieldSpec {
        key: "formula",
        label: "Formula",
        hint: "Enter calculation formula...",
        kind: FieldKind::Multiline,
    },
    FieldSpec {
        key: "outputField",
        label: "Output Field Name",
        hint: "result",
        kind: FieldKind::Text,
    },
];

const VALIDATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "rules",
        label: "Validation Rules",
        hint: "",
        kind: FieldKind::Checklist(&[
            ("required", "Required Check"),
            ("dataType", "DataType Check"),
            ("range", "Range Check"),
            ("custom", "Custom Check"),
        ]),
    },
    FieldSpec {
        key: "errorHandling",
        label: "Error Handling",
        hint: "Select handling...",
        kind: FieldKind::Select(&[
            ("stop", "Stop on Error"),
            ("skip", "Skip Invalid Records"),
            ("log", "Log and Continue"),
        ]),
    },
];

const CONDITION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "condition",
        label: "Condition Expression",
        hint: "e.g., value > 100 AND status = 'active'",
        kind: FieldKind::Multiline,
    },
    FieldSpec {
        key: "trueAction",
        label: "True Path Action",
        hint: "Action when condition is true",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "falseAction",
        label: "False Path Action",
        hint: "Action when condition is false",
        kind: FieldKind::Text,
    },
];

const OUTPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "outputType",
        label: "Output Type",
        hint: "Select output...",
        kind: FieldKind::Select(&[
            ("database", "Database Table"),
            ("file", "File Export"),
            ("api", "API Endpoint"),
            ("dashboard", "Dashboard"),
        ]),
    },
    FieldSpec {
        key: "destination",
        label: "Destination",
        hint: "Output destination...",
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "formatOptions",
        label: "Format Options",
        hint: "JSON configuration for output format...",
        kind: FieldKind::Multiline,
    },
];

impl NodeKind {
    /// All node kinds, in palette display order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::DataSource,
        NodeKind::Calculation,
        NodeKind::Validation,
        NodeKind::Condition,
        NodeKind::Output,
    ];

    /// The catalog entry describing this kind.
    pub fn catalog(self) -> &'static CatalogEntry {
        match self {
            NodeKind::DataSource => &DATA_SOURCE,
            NodeKind::Calculation => &CALCULATION,
            NodeKind::Validation => &VALIDATION,
            NodeKind::Condition => &CONDITION,
            NodeKind::Output => &OUTPUT,
        }
    }

    /// The configuration fields the properties panel shows for this kind.
    ///
    /// General fields (name, description, enabled, log output) are not part
    /// of the schema; the panel renders those for every kind.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            NodeKind::DataSource => DATA_SOURCE_FIELDS,
            NodeKind::Calculation => CALCULATION_FIELDS,
            NodeKind::Validation => VALIDATION_FIELDS,
            NodeKind::Condition => CONDITION_FIELDS,
            NodeKind::Output => OUTPUT_FIELDS,
        }
    }
}
