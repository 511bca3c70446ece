//! Tile grouping for the master layouts.
//!
//! Grouping is a pure function of the tile count (and, for the column layout,
//! the master capacity). It is recomputed on every `apply` and `adjust` so the
//! boundaries used to resize a tile are always the ones it was laid out with.
//!
//! ## Column layout
//!
//! ```text
//!  1 tile      n <= capacity   n == capacity + 1   n > capacity + 1
//! ┌───────┐    ┌───────┐       ┌─────┬───┐         ┌─────┬───┬───┐
//! │       │    │   M   │       │  M  │   │         │  M  │ L │ R │
//! │   M   │    ├───────┤       ├─────┤ S │         │     ├───┤   │
//! │       │    │   M   │       │  M  │   │         │     │ L │   │
//! └───────┘    └───────┘       └─────┴───┘         └─────┴───┴───┘
//! ```
//!
//! Tiles are taken in order: master first, then the left stack (which gets the
//! larger half), then the right stack.
//!
//! ## Row layout
//!
//! The master is always a single tile. Two and three tiles put the rest into
//! one stack column; four or more put them into rows of two, the last row
//! holding a single tile when the count is even.

use std::ops::Range;

use smallvec::SmallVec;

/// The grouping configuration selected from the tile count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// No tiles.
    Empty,
    /// One tile filling the area.
    Single,
    /// Every tile stacked in the master group; no stack exists yet.
    MasterOnly,
    /// A master group beside one stack group.
    MasterStack,
    /// A master group beside a left and a right stack.
    ThreeColumn,
    /// A single master beside rows of up to two tiles.
    Rows,
}

/// What a group is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// The master group.
    Master,
    /// The only stack group.
    Stack,
    /// The stack column next to the master.
    LeftStack,
    /// The outermost stack column.
    RightStack,
    /// A row of the row layout, counted from the top.
    Row(usize),
}

/// A run of consecutive tiles laid out together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Role of the group.
    pub role: GroupRole,
    /// Indices into the ordered tile list.
    pub range: Range<usize>,
}

impl Group {
    const fn new(role: GroupRole, range: Range<usize>) -> Self { Self { role, range } }

    /// Number of tiles in the group.
    #[must_use]
    pub const fn len(&self) -> usize { self.range.end - self.range.start }

    /// Returns true if the group holds no tiles.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Where a tile sits within the grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Index of the group in [`Grouping::groups`].
    pub group: usize,
    /// Role of that group.
    pub role: GroupRole,
    /// Position of the tile inside its group.
    pub position: usize,
    /// Size of the group.
    pub len: usize,
}

/// Groups for one tile count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    /// Selected regime.
    pub regime: Regime,
    /// Groups in tile order.
    pub groups: SmallVec<[Group; 4]>,
}

impl Grouping {
    /// Groups `tile_count` tiles for the column layout.
    ///
    /// The master group fills up to `master_capacity` tiles before any stack
    /// column appears.
    #[must_use]
    pub fn columns(tile_count: usize, master_capacity: usize) -> Self {
        let capacity = master_capacity.max(1);
        let mut groups = SmallVec::new();

        let regime = match tile_count {
            0 => Regime::Empty,
            1 => {
                groups.push(Group::new(GroupRole::Master, 0..1));
                Regime::Single
            }
            n if n <= capacity => {
                groups.push(Group::new(GroupRole::Master, 0..n));
                Regime::MasterOnly
            }
            n if n == capacity + 1 => {
                groups.push(Group::new(GroupRole::Master, 0..capacity));
                groups.push(Group::new(GroupRole::Stack, capacity..n));
                Regime::MasterStack
            }
            n => {
                let remaining = n - capacity;
                let right = remaining / 2;
                let left = remaining - right;
                groups.push(Group::new(GroupRole::Master, 0..capacity));
                groups.push(Group::new(GroupRole::LeftStack, capacity..capacity + left));
                groups.push(Group::new(GroupRole::RightStack, capacity + left..n));
                Regime::ThreeColumn
            }
        };

        Self { regime, groups }
    }

    /// Groups `tile_count` tiles for the row layout.
    #[must_use]
    pub fn rows(tile_count: usize) -> Self {
        let mut groups = SmallVec::new();

        let regime = match tile_count {
            0 => Regime::Empty,
            1 => {
                groups.push(Group::new(GroupRole::Master, 0..1));
                Regime::Single
            }
            2 | 3 => {
                groups.push(Group::new(GroupRole::Master, 0..1));
                groups.push(Group::new(GroupRole::Stack, 1..tile_count));
                Regime::MasterStack
            }
            n => {
                groups.push(Group::new(GroupRole::Master, 0..1));
                let mut start = 1;
                let mut row = 0;
                while start < n {
                    let end = (start + 2).min(n);
                    groups.push(Group::new(GroupRole::Row(row), start..end));
                    start = end;
                    row += 1;
                }
                Regime::Rows
            }
        };

        Self { regime, groups }
    }

    /// Returns the slot of the tile at `index`, if it is grouped.
    #[must_use]
    pub fn locate(&self, index: usize) -> Option<Slot> {
        self.groups.iter().enumerate().find_map(|(group, g)| {
            g.range.contains(&index).then(|| Slot {
                group,
                role: g.role,
                position: index - g.range.start,
                len: g.len(),
            })
        })
    }

    /// Returns the group with the given role.
    #[must_use]
    pub fn group(&self, role: GroupRole) -> Option<&Group> {
        self.groups.iter().find(|g| g.role == role)
    }

    /// Returns the row groups in top-to-bottom order.
    pub fn rows_iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| matches!(g.role, GroupRole::Row(_)))
    }

    /// Number of rows in the row layout.
    #[must_use]
    pub fn row_count(&self) -> usize { self.rows_iter().count() }
}
