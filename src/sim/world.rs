//! Simulation world mirror
//!
//! The physics engine owns bodies and composites; the session sees them
//! through this mirror. Each object may carry a `PawnId`, a back-reference
//! into the pawn registry. The object's lifetime is the pawn's lifetime.

use glam::Vec2;

use super::pawn::PawnId;

/// Physics body handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Physics composite handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeId(pub u32);

/// A rigid body
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub pawn: Option<PawnId>,
}

/// A group of bodies acting as one object
#[derive(Debug, Clone)]
pub struct Composite {
    pub id: CompositeId,
    pub bodies: Vec<BodyId>,
    pub pawn: Option<PawnId>,
}

/// One physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Simulation time (ms, monotonically increasing)
    pub timestamp: f64,
}

/// Two bodies that started touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub body_a: BodyId,
    pub body_b: BodyId,
}

/// All pairs that started touching in one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionEvent {
    pub pairs: Vec<CollisionPair>,
}

impl CollisionEvent {
    pub fn single(body_a: BodyId, body_b: BodyId) -> Self {
        Self {
            pairs: vec![CollisionPair { body_a, body_b }],
        }
    }
}

/// Bodies and composites currently in the simulation
#[derive(Debug, Clone, Default)]
pub struct World {
    pub bodies: Vec<Body>,
    pub composites: Vec<Composite>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_body(&mut self, position: Vec2, pawn: Option<PawnId>) -> BodyId {
        let id = BodyId(self.next_handle());
        self.bodies.push(Body { id, position, pawn });
        id
    }

    pub fn add_composite(&mut self, bodies: Vec<BodyId>, pawn: Option<PawnId>) -> CompositeId {
        let id = CompositeId(self.next_handle());
        self.composites.push(Composite { id, bodies, pawn });
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Remove a body, returning the pawn it carried
    pub fn remove_body(&mut self, id: BodyId) -> Option<PawnId> {
        let index = self.bodies.iter().position(|b| b.id == id)?;
        let body = self.bodies.remove(index);
        for composite in &mut self.composites {
            composite.bodies.retain(|&b| b != id);
        }
        body.pawn
    }

    /// Remove a composite (not its member bodies), returning its pawn
    pub fn remove_composite(&mut self, id: CompositeId) -> Option<PawnId> {
        let index = self.composites.iter().position(|c| c.id == id)?;
        self.composites.remove(index).pawn
    }

    /// Pawn attached to a body, if the body still exists
    pub fn pawn_of(&self, id: BodyId) -> Option<PawnId> {
        self.body(id).and_then(|b| b.pawn)
    }

    /// Every attached pawn: bodies first, then composites
    pub fn attached_pawns(&self) -> Vec<PawnId> {
        self.bodies
            .iter()
            .filter_map(|b| b.pawn)
            .chain(self.composites.iter().filter_map(|c| c.pawn))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_body_returns_pawn() {
        let mut world = World::new();
        let a = world.add_body(Vec2::ZERO, Some(PawnId(4)));
        let b = world.add_body(Vec2::ONE, None);
        let c = world.add_composite(vec![a, b], Some(PawnId(5)));

        assert_eq!(world.remove_body(a), Some(PawnId(4)));
        assert_eq!(world.remove_body(b), None);
        assert!(world.body(a).is_none());
        assert!(world.composites[0].bodies.is_empty());
        assert_eq!(world.remove_composite(c), Some(PawnId(5)));
        assert_eq!(world.remove_body(a), None);
    }

    #[test]
    fn test_attached_pawns_skips_bare_objects() {
        let mut world = World::new();
        world.add_body(Vec2::ZERO, Some(PawnId(1)));
        world.add_body(Vec2::ZERO, None);
        world.add_composite(Vec::new(), Some(PawnId(2)));
        world.add_composite(Vec::new(), None);
        assert_eq!(world.attached_pawns(), vec![PawnId(1), PawnId(2)]);
    }
}
