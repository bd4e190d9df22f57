//! Layout scenarios: a container plus an ordered content stream.

use flowspace_layout::{ClearSide, FloatSide, FlowRenderSpace, LineCursor, RenderSpace};
use flowspace_types::config::FlowConfig;
use flowspace_types::error::Result;
use flowspace_types::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One element of the content stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Float {
        side: FloatSide,
        width: i32,
        height: i32,
    },
    Line {
        height: i32,
        #[serde(default)]
        min_width: i32,
    },
    Clear {
        side: ClearSide,
    },
}

/// A container and the content flowed through it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub layout: FlowConfig,
    #[serde(default, rename = "item")]
    pub items: Vec<Item>,
}

impl Scenario {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(toml_str)?;
        scenario.layout.validate()?;
        Ok(scenario)
    }
}

/// Where one content item ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    Float { side: FloatSide, rect: Rect },
    Line { rect: Rect },
    Clear { side: ClearSide, y: i32 },
}

/// The result of flowing a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub container_width: i32,
    pub placements: Vec<Placement>,
    /// Row below the last line and every float.
    pub content_height: i32,
    pub break_points: Vec<i32>,
}

/// Flow every item of the scenario through a fresh render space.
pub fn run(scenario: &Scenario) -> Result<Report> {
    let mut space = FlowRenderSpace::from_config(&scenario.layout)?;
    let mut cursor = LineCursor::new(&mut space, 0);
    let mut placements = Vec::with_capacity(scenario.items.len());

    for item in &scenario.items {
        let placement = match *item {
            Item::Float {
                side,
                width,
                height,
            } => Placement::Float {
                side,
                rect: cursor.place_float(side, width, height)?,
            },
            Item::Line { height, min_width } => Placement::Line {
                rect: cursor.next_line(height, min_width)?.rect(),
            },
            Item::Clear { side } => Placement::Clear {
                side,
                y: cursor.clear(side),
            },
        };
        log::debug!("{placement:?}");
        placements.push(placement);
    }

    let content_height = cursor
        .y()
        .max(cursor.space().next_clear_y(ClearSide::Both));

    Ok(Report {
        container_width: space.container_width(),
        placements,
        content_height,
        break_points: space.break_points(),
    })
}
