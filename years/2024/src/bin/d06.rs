use core::fmt;

use lib::prelude::*;
use thiserror::Error;

#[entry(input = "d06.txt", expect = 41)]
fn main(input: IStr) -> Result<u32> {
    let mut world = World::parse(input.as_data())?;
    let status = world.run();

    log::debug!("{world}");

    if status == Status::StuckInPlace {
        log::warn!("{} is boxed in, stopping early", world.guard);
    }

    Ok(world.visited())
}

#[derive(Debug, Error)]
enum WorldError {
    #[error("world has no tiles")]
    Empty,
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown tile {tile:?} at ({x}, {y})")]
    UnknownTile { x: usize, y: usize, tile: char },
    #[error("world has no guard")]
    MissingGuard,
    #[error("second guard at ({x}, {y})")]
    DuplicateGuard { x: usize, y: usize },
}

/// Lookup outside of the grid.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("position is outside of the world")]
struct OutOfBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pos {
    x: usize,
    y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    fn from_glyph(c: char) -> Option<Self> {
        Some(match c {
            '^' => Facing::North,
            '>' => Facing::East,
            'v' => Facing::South,
            '<' => Facing::West,
            _ => return None,
        })
    }

    /// The direction after a clockwise quarter-turn.
    fn turn_right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    fn arrow(self) -> char {
        match self {
            Facing::North => '▲',
            Facing::East => '►',
            Facing::South => '▼',
            Facing::West => '◄',
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileKind {
    Ground,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tile {
    pos: Pos,
    kind: TileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Guard {
    pos: Pos,
    facing: Facing,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pos { x, y } = self.pos;
        write!(f, "Guard({x}, {y}, {})", self.facing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    ExitedGrid,
    StuckInPlace,
}

struct World {
    width: usize,
    height: usize,
    /// Tiles in row-major order.
    tiles: Vec<TileKind>,
    guard: Guard,
    /// Every position the guard has stood on, starting with where it spawned.
    path: Vec<Pos>,
    /// Bitset over `tiles` of every position in `path`.
    visited: Vec<u128>,
    status: Status,
}

impl World {
    /// Parse a world, ignoring blank lines and whitespace around rows.
    fn parse(data: &[u8]) -> Result<Self, WorldError> {
        let mut tiles = Vec::new();
        let mut guard = None;
        let mut width = None;
        let mut height = 0;

        let rows = data
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty());

        for (y, row) in rows.enumerate() {
            let mut columns = 0;

            for (x, c) in row.chars().enumerate() {
                let kind = match c {
                    '.' => TileKind::Ground,
                    '#' => TileKind::Obstacle,
                    c => {
                        let Some(facing) = Facing::from_glyph(c) else {
                            return Err(WorldError::UnknownTile { x, y, tile: c });
                        };

                        if guard.is_some() {
                            return Err(WorldError::DuplicateGuard { x, y });
                        }

                        guard = Some(Guard {
                            pos: Pos { x, y },
                            facing,
                        });

                        TileKind::Ground
                    }
                };

                tiles.push(kind);
                columns += 1;
            }

            let expected = *width.get_or_insert(columns);

            if columns != expected {
                return Err(WorldError::RaggedRow {
                    row: y,
                    expected,
                    actual: columns,
                });
            }

            height += 1;
        }

        let Some(width) = width else {
            return Err(WorldError::Empty);
        };

        let guard = guard.ok_or(WorldError::MissingGuard)?;
        let visited = vec![0u128; tiles.len().div_ceil(128)];

        let mut world = Self {
            width,
            height,
            tiles,
            guard,
            path: Vec::new(),
            visited,
            status: Status::Running,
        };

        world.visit(guard.pos);
        Ok(world)
    }

    fn bit(&self, pos: Pos) -> u32 {
        (pos.y * self.width + pos.x) as u32
    }

    fn visit(&mut self, pos: Pos) {
        let bit = self.bit(pos);
        self.path.push(pos);
        self.visited.set_bit(bit);
    }

    /// Look up the tile at the given position.
    fn tile(&self, pos: Pos) -> Result<Tile, OutOfBounds> {
        let grid = self.tiles.as_grid(self.width);
        let kind = *grid.try_get(pos.y, pos.x).ok_or(OutOfBounds)?;
        Ok(Tile { pos, kind })
    }

    /// The tile the guard is currently facing.
    fn ahead(&self) -> Result<Tile, OutOfBounds> {
        let (dx, dy) = self.guard.facing.delta();
        let Pos { x, y } = self.guard.pos;

        let pos = Pos {
            x: x.checked_add_signed(dx).ok_or(OutOfBounds)?,
            y: y.checked_add_signed(dy).ok_or(OutOfBounds)?,
        };

        self.tile(pos)
    }

    /// Advance the simulation by one tick.
    ///
    /// The guard turns right until it faces something other than an obstacle,
    /// then either walks forward or walks off the grid. A guard which has
    /// turned all the way around without finding a way out is stuck.
    fn step(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        for _ in 0..4 {
            let Ok(tile) = self.ahead() else {
                self.status = Status::ExitedGrid;
                return self.status;
            };

            match tile.kind {
                TileKind::Ground => {
                    self.guard.pos = tile.pos;
                    self.visit(tile.pos);
                    return self.status;
                }
                TileKind::Obstacle => {
                    self.guard.facing = self.guard.facing.turn_right();
                }
            }
        }

        self.status = Status::StuckInPlace;
        self.status
    }

    /// Step until the guard leaves or gets stuck.
    fn run(&mut self) -> Status {
        loop {
            let status = self.step();
            log::trace!("{self}");

            if status != Status::Running {
                return status;
            }
        }
    }

    /// Number of distinct tiles visited.
    fn visited(&self) -> u32 {
        self.visited.count_ones()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "═".repeat(self.width);

        writeln!(f, "╔{border}╗")?;

        for (y, row) in self.tiles.as_grid(self.width).rows().enumerate() {
            f.write_str("║")?;

            for (x, kind) in row.iter().enumerate() {
                let c = match kind {
                    _ if self.guard.pos == (Pos { x, y }) => self.guard.facing.arrow(),
                    TileKind::Obstacle => '█',
                    TileKind::Ground if self.visited.test_bit(self.bit(Pos { x, y })) => '░',
                    TileKind::Ground => ' ',
                };

                write!(f, "{c}")?;
            }

            writeln!(f, "║")?;
        }

        writeln!(f, "╚{border}╝")?;
        writeln!(f, "World: {}x{}", self.width, self.height)?;
        writeln!(f, "{}", self.guard)?;
        write!(f, "Visited tiles: {}", self.visited())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(data: &[u8]) -> World {
        World::parse(data).unwrap()
    }

    #[test]
    fn test_sample() {
        let mut world = world(include_bytes!("../../inputs/d06.txt"));

        assert_eq!((world.width, world.height), (10, 10));
        assert_eq!(world.guard.pos, Pos { x: 4, y: 6 });
        assert_eq!(world.guard.facing, Facing::North);

        assert_eq!(world.run(), Status::ExitedGrid);
        assert_eq!(world.visited(), 41);
    }

    #[test]
    fn test_step_onto_ground() {
        let mut world = world(b"...\n.^.\n...\n");

        assert_eq!(world.step(), Status::Running);
        assert_eq!(world.guard.pos, Pos { x: 1, y: 0 });
        assert_eq!(world.guard.facing, Facing::North);
        assert_eq!(world.path, [Pos { x: 1, y: 1 }, Pos { x: 1, y: 0 }]);
    }

    #[test]
    fn test_obstacle_turns_right() {
        let mut world = world(b".#.\n.^.\n");

        assert_eq!(world.step(), Status::Running);
        assert_eq!(world.guard.facing, Facing::East);
        assert_eq!(world.guard.pos, Pos { x: 2, y: 1 });

        // Turning towards the edge exits without moving.
        let mut world = self::world(b".#\n.^\n");

        assert_eq!(world.step(), Status::ExitedGrid);
        assert_eq!(world.guard.facing, Facing::East);
        assert_eq!(world.guard.pos, Pos { x: 1, y: 1 });
        assert_eq!(world.path.len(), 1);
    }

    #[test]
    fn test_stuck_in_place() {
        let mut world = world(b".#.\n#^#\n.#.\n");

        assert_eq!(world.step(), Status::StuckInPlace);
        assert_eq!(world.guard.facing, Facing::North);
        assert_eq!(world.path.len(), 1);

        // Terminal states don't change the world.
        assert_eq!(world.step(), Status::StuckInPlace);
        assert_eq!(world.run(), Status::StuckInPlace);
        assert_eq!(world.path.len(), 1);
        assert_eq!(world.visited(), 1);
    }

    #[test]
    fn test_visited_is_monotonic() {
        let mut world = world(include_bytes!("../../inputs/d06.txt"));
        let mut last = world.visited();

        while world.step() == Status::Running {
            let visited = world.visited();
            assert!(visited >= last);
            assert!(visited as usize <= world.path.len());
            last = visited;
        }

        // The sample walks over some tiles more than once.
        assert!(world.path.len() > last as usize);
    }

    #[test]
    fn test_visited_tracks_path() {
        use std::collections::HashSet;

        let mut world = world(include_bytes!("../../inputs/d06.txt"));

        loop {
            let distinct = world.path.iter().map(|p| (p.x, p.y)).collect::<HashSet<_>>();
            assert_eq!(world.visited() as usize, distinct.len());

            for &pos in &world.path {
                assert!(world.visited.test_bit(world.bit(pos)));
            }

            if world.step() != Status::Running {
                break;
            }
        }

        assert_eq!(world.visited(), 41);
    }

    #[test]
    fn test_deterministic() {
        let data = include_bytes!("../../inputs/d06.txt");

        let mut a = world(data);
        let mut b = world(data);

        assert_eq!(a.run(), b.run());
        assert_eq!(a.path, b.path);
        assert_eq!(a.guard, b.guard);
    }

    #[test]
    fn test_open_world() {
        let mut world = world(b".....\n.....\n.....\n.....\n..^..\n.....\n.....\n");
        assert_eq!((world.width, world.height), (5, 7));

        let mut ticks = 0;

        while world.status == Status::Running {
            world.step();
            ticks += 1;
        }

        assert_eq!(world.status, Status::ExitedGrid);
        assert_eq!(ticks, 5);
        assert_eq!(world.visited(), ticks);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(World::parse(b""), Err(WorldError::Empty)));
        assert!(matches!(World::parse(b"\n  \n"), Err(WorldError::Empty)));

        assert!(matches!(
            World::parse(b"..\n...\n^."),
            Err(WorldError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 3
            })
        ));

        assert!(matches!(
            World::parse(b"..x^"),
            Err(WorldError::UnknownTile { x: 2, y: 0, tile: 'x' })
        ));

        assert!(matches!(World::parse(b"...\n..."), Err(WorldError::MissingGuard)));

        assert!(matches!(
            World::parse(b".\n^\n>"),
            Err(WorldError::DuplicateGuard { x: 0, y: 2 })
        ));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let world = world(b"\n  .#.\n  .^.  \n\n");
        assert_eq!((world.width, world.height), (3, 2));
        assert_eq!(world.guard.pos, Pos { x: 1, y: 1 });
    }

    #[test]
    fn test_out_of_bounds() {
        let world = world(b"..\n^.\n");

        assert_eq!(world.tile(Pos { x: 2, y: 0 }), Err(OutOfBounds));
        assert_eq!(world.tile(Pos { x: 0, y: 2 }), Err(OutOfBounds));

        let tile = world.tile(Pos { x: 1, y: 1 }).unwrap();
        assert_eq!(tile.kind, TileKind::Ground);
    }

    #[test]
    fn test_display() {
        let mut world = world(b".#\n^.\n");
        world.step();

        let expected = "\
╔══╗
║▲█║
║░ ║
╚══╝
World: 2x2
Guard(0, 0, north)
Visited tiles: 2";

        assert_eq!(world.to_string(), expected);
    }
}
