use crate::noun::NounId;

/// The set of capability components attached to a noun.
///
/// A noun supports an action only if it carries the components that action
/// reads and writes. Generic engine code checks for presence before touching
/// the state inside.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    pub openable: Option<Openable>,
    pub lockable: Option<Lockable>,
    pub handleable: Option<Handleable>,
    pub container: Option<Container>,
    pub supporter: Option<Supporter>,
    pub wearable: Option<Wearable>,
    pub edible: Option<Edible>,
    pub pushable: Option<Pushable>,
    pub vehicle: Option<Vehicle>,
    pub light: Option<LightSource>,
    pub room: Option<RoomState>,
    pub dialog: Option<Dialog>,
}

impl ComponentSet {
    /// Returns true if the noun can be opened and closed and is currently closed.
    pub fn is_closed(&self) -> bool {
        self.openable.as_ref().is_some_and(|o| o.closed)
    }

    /// Returns true if the noun is lockable and currently locked.
    pub fn is_locked(&self) -> bool {
        self.lockable.as_ref().is_some_and(|l| l.locked)
    }

    /// Returns true if the noun is a container others can see into while closed.
    pub fn is_transparent(&self) -> bool {
        self.container.as_ref().is_some_and(|c| c.transparent)
    }

    /// Returns true if the noun gives off light right now.
    pub fn is_shining(&self) -> bool {
        self.light.as_ref().is_some_and(|l| l.on)
    }

    /// Returns true if the noun is a vehicle.
    pub fn is_vehicle(&self) -> bool {
        self.vehicle.is_some()
    }
}

// ---------------------------------------------------------------------------
// Doors, boxes, and locks
// ---------------------------------------------------------------------------

/// Something that can be opened and closed.
#[derive(Debug, Clone, Default)]
pub struct Openable {
    pub closed: bool,
}

/// Something that can be locked with a specific key.
#[derive(Debug, Clone)]
pub struct Lockable {
    /// The only noun that fits this lock.
    pub key: NounId,
    pub locked: bool,
}

/// Something that holds other things via the `Containing` relationship.
#[derive(Debug, Clone, Default)]
pub struct Container {
    /// Contents stay visible while closed.
    pub transparent: bool,
    /// The player can get inside.
    pub enterable: bool,
}

/// Something that holds other things via the `Supporting` relationship.
#[derive(Debug, Clone, Default)]
pub struct Supporter;

// ---------------------------------------------------------------------------
// Portable things
// ---------------------------------------------------------------------------

/// Something the player can pick up.
#[derive(Debug, Clone, Default)]
pub struct Handleable {
    /// Set once the player has picked it up at least once.
    pub handled: bool,
}

/// Something the player can put on.
#[derive(Debug, Clone, Default)]
pub struct Wearable;

/// Something the player can eat. Eating detaches it from the world.
#[derive(Debug, Clone, Default)]
pub struct Edible;

/// Something too heavy to carry that can be pushed from room to room.
#[derive(Debug, Clone, Default)]
pub struct Pushable;

/// An enterable thing that carries its occupant along when it moves.
#[derive(Debug, Clone, Default)]
pub struct Vehicle;

/// A lamp, torch, or anything else that can light a dark room.
#[derive(Debug, Clone, Default)]
pub struct LightSource {
    pub on: bool,
}

// ---------------------------------------------------------------------------
// Rooms and people
// ---------------------------------------------------------------------------

/// Per-room state.
#[derive(Debug, Clone)]
pub struct RoomState {
    /// Set on first occupancy.
    pub visited: bool,
    /// Unlit rooms need a light source.
    pub lit: bool,
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            visited: false,
            lit: true,
        }
    }
}

/// Lines the player can say to a noun, each with the reply it gets.
///
/// Lines are consumed when said, so order is the order they were written.
#[derive(Debug, Clone, Default)]
pub struct Dialog {
    pub lines: Vec<(String, String)>,
}

impl Dialog {
    /// Add a line the player can say and the reply it draws.
    pub fn with_line(mut self, said: impl Into<String>, reply: impl Into<String>) -> Self {
        self.lines.push((said.into(), reply.into()));
        self
    }

    /// Remove a line and return its reply.
    pub fn take(&mut self, said: &str) -> Option<String> {
        let position = self.lines.iter().position(|(text, _)| text == said)?;
        Some(self.lines.remove(position).1)
    }
}
