//! Instruction routes: parsed sequences of per-step moves.
//!
//! The original instruction format is a bare string over `^ > v <`.  Parsing
//! is permissive by default: an unrecognized character still occupies one
//! position in the route (a [`Step::Hold`]), so it consumes a round-robin
//! turn without moving the selected agent.  [`Route::parse_strict`] is the
//! opt-in validating alternative.

use crate::{DeliveryError, DeliveryResult, Direction};

/// One instruction in a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Move the selected agent one cell in `Direction`.
    Move(Direction),

    /// No movement.  The selected agent stays put, but the step still
    /// consumes its round-robin turn and re-records its current cell.
    Hold,
}

impl Step {
    /// Decode a single instruction symbol, mapping unknowns to `Hold`.
    #[inline]
    pub fn from_symbol(c: char) -> Step {
        match Direction::from_symbol(c) {
            Some(d) => Step::Move(d),
            None => Step::Hold,
        }
    }
}

/// An ordered sequence of [`Step`]s, consumed strictly left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    /// Parse an instruction string permissively.
    ///
    /// Every character becomes exactly one step; characters outside `^>v<`
    /// become [`Step::Hold`].  This is the reference behavior and never
    /// fails.
    pub fn parse(deliveries: &str) -> Route {
        Route {
            steps: deliveries.chars().map(Step::from_symbol).collect(),
        }
    }

    /// Parse an instruction string, rejecting the first character outside
    /// `^>v<`.
    ///
    /// This is a deliberate deviation from the reference permissive
    /// behavior for callers that want malformed input surfaced instead of
    /// silently ignored.  `index` in the error is the character index, not
    /// the byte offset.
    pub fn parse_strict(deliveries: &str) -> DeliveryResult<Route> {
        let mut steps = Vec::with_capacity(deliveries.len());
        for (index, c) in deliveries.chars().enumerate() {
            match Direction::from_symbol(c) {
                Some(d) => steps.push(Step::Move(d)),
                None => return Err(DeliveryError::UnknownSymbol { symbol: c, index }),
            }
        }
        Ok(Route { steps })
    }

    /// Number of steps (including `Hold`s).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps in input order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl From<Vec<Step>> for Route {
    fn from(steps: Vec<Step>) -> Route {
        Route { steps }
    }
}

impl FromIterator<Direction> for Route {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Route {
        Route {
            steps: iter.into_iter().map(Step::Move).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
