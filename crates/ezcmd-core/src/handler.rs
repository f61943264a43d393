//! Block handler seam
//!
//! Conditions need per-device defaults: which property a bare
//! `if "Door" is open` reads, which direction a numeric comparison implies,
//! and how the set of matched devices is provided. Those come from a
//! [`BlockHandler`] looked up by block type through a [`HandlerRegistry`].

use crate::ast::Selector;
use crate::types::{
    BlockType, BooleanPropertyType, DirectionType, NumericPropertyType, StringPropertyType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supplies the devices an aggregate condition is evaluated over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityProvider {
    /// Devices matched by a selector
    Selector(Selector),
}

impl fmt::Display for EntityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityProvider::Selector(selector) => {
                write!(f, "{:?}", selector.block_type)?;
                if selector.is_group {
                    f.write_str(" group")?;
                }
                write!(f, " \"{}\"", selector.name)?;
                if let Some(index) = selector.index {
                    write!(f, "[{}]", index)?;
                }
                Ok(())
            }
        }
    }
}

/// Per-block-type defaults
pub trait BlockHandler: Send + Sync {
    /// Block type this handler serves
    fn block_type(&self) -> BlockType;

    fn default_boolean_property(&self) -> BooleanPropertyType;

    /// Numeric property implied when moving in `direction`
    fn default_numeric_property(&self, direction: DirectionType) -> NumericPropertyType;

    fn default_string_property(&self) -> StringPropertyType;

    fn default_direction(&self) -> DirectionType;

    /// Build the device set an aggregate condition iterates
    fn entity_provider(&self, selector: &Selector) -> EntityProvider {
        EntityProvider::Selector(selector.clone())
    }
}

/// Looks up the handler for a block type
pub trait HandlerRegistry: Send + Sync {
    fn get_handler(&self, block_type: BlockType) -> Option<&dyn BlockHandler>;
}

/// Table-driven handler
#[derive(Debug, Clone, PartialEq)]
pub struct StandardBlockHandler {
    pub block_type: BlockType,
    pub boolean_property: BooleanPropertyType,
    pub numeric_property: NumericPropertyType,
    pub string_property: StringPropertyType,
    pub direction: DirectionType,
}

impl BlockHandler for StandardBlockHandler {
    fn block_type(&self) -> BlockType {
        self.block_type
    }

    fn default_boolean_property(&self) -> BooleanPropertyType {
        self.boolean_property
    }

    // Standard handlers expose a single numeric property regardless of direction
    fn default_numeric_property(&self, _direction: DirectionType) -> NumericPropertyType {
        self.numeric_property
    }

    fn default_string_property(&self) -> StringPropertyType {
        self.string_property
    }

    fn default_direction(&self) -> DirectionType {
        self.direction
    }
}

/// Registry holding one handler per block type
pub struct BlockHandlerRegistry {
    handlers: HashMap<BlockType, Box<dyn BlockHandler>>,
}

impl BlockHandlerRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        BlockHandlerRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with the standard handler for every block type
    pub fn new() -> Self {
        use BooleanPropertyType as B;
        use DirectionType as D;
        use NumericPropertyType as N;
        use StringPropertyType as S;

        let table = [
            (BlockType::Piston, B::Power, N::Height, S::Name, D::Up),
            (BlockType::Rotor, B::Power, N::Angle, S::Name, D::Clockwise),
            (BlockType::Program, B::Running, N::Progress, S::Run, D::Up),
            (BlockType::Timer, B::Running, N::Progress, S::Name, D::Up),
            (BlockType::Light, B::Power, N::Range, S::Color, D::Up),
            (BlockType::Projector, B::Power, N::Progress, S::Name, D::Up),
            (BlockType::Merge, B::Connected, N::Progress, S::Name, D::Up),
            (BlockType::Connector, B::Connected, N::Range, S::Name, D::Up),
            (BlockType::Welder, B::Power, N::Range, S::Name, D::Up),
            (BlockType::Grinder, B::Power, N::Range, S::Name, D::Up),
            (BlockType::Door, B::Open, N::ClosedRatio, S::Name, D::Up),
            (BlockType::Display, B::Power, N::FontSize, S::Text, D::Up),
            (BlockType::Sound, B::Power, N::Volume, S::Sound, D::Up),
        ];

        let mut registry = Self::empty();
        for (block_type, boolean_property, numeric_property, string_property, direction) in table {
            registry.register(StandardBlockHandler {
                block_type,
                boolean_property,
                numeric_property,
                string_property,
                direction,
            });
        }
        registry
    }

    /// Register (or replace) the handler for its block type
    pub fn register(&mut self, handler: impl BlockHandler + 'static) {
        self.handlers.insert(handler.block_type(), Box::new(handler));
    }
}

impl Default for BlockHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerRegistry for BlockHandlerRegistry {
    fn get_handler(&self, block_type: BlockType) -> Option<&dyn BlockHandler> {
        self.handlers.get(&block_type).map(|h| h.as_ref())
    }
}
