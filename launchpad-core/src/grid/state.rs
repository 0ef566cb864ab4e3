//! Grid state definition

use heapless::String;
use launchpad_protocol::{Button, Position, GRID_SIZE, MAX_COORD};

/// Number of stored cells (the dead corner included, though never addressed)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Intensity glyphs for the text dump, indexed by channel level
pub const GLYPHS: [char; 4] = ['.', 'o', 'O', '0'];

/// Capacity of [`State::dump`]: three characters per cell plus a newline per row
pub const DUMP_LEN: usize = GRID_SIZE * (GRID_SIZE * 3 + 1);

/// Appearance of every button on the grid
///
/// Storage is flat and row-major. Every access goes through
/// [`Position::fix`], so `(8,0)` reads and writes the `(8,1)` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    cells: [Button; CELL_COUNT],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// All buttons off
    pub fn new() -> Self {
        Self {
            cells: [Button::default(); CELL_COUNT],
        }
    }

    /// Appearance of the button at `position`
    pub fn at(&self, position: Position) -> Button {
        self.cells[position.index()]
    }

    /// Mutable access to the button at `position`
    pub fn at_mut(&mut self, position: Position) -> &mut Button {
        &mut self.cells[position.index()]
    }

    /// Replace the button at `position`
    pub fn set(&mut self, position: Position, button: Button) {
        *self.at_mut(position) = button;
    }

    /// Walk every cell row by row
    ///
    /// `y` is the outer loop, `x` the inner one. The dead corner `(8,0)` is
    /// visited with its raw position and the aliased button.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(Position, Button),
    {
        for (position, button) in self.cells() {
            f(position, button);
        }
    }

    /// Iterator form of [`State::visit`]
    pub fn cells(&self) -> impl Iterator<Item = (Position, Button)> + '_ {
        Position::all().map(move |p| (p, self.at(p)))
    }

    /// Number of addressable buttons that differ from the default
    pub fn lit_count(&self) -> usize {
        self.cells()
            .filter(|(p, b)| !p.is_dead_corner() && *b != Button::default())
            .count()
    }

    /// Render the grid as text
    ///
    /// Each button is two glyphs (red then green intensity) and a space.
    /// The dead corner has no button, so the scene row is one cell short.
    pub fn dump(&self) -> String<DUMP_LEN> {
        let mut out = String::new();
        self.visit(|p, b| {
            if p.is_dead_corner() {
                let _ = out.push('\n');
                return;
            }
            let color = b.color.fixed();
            let _ = out.push(GLYPHS[color.red as usize]);
            let _ = out.push(GLYPHS[color.green as usize]);
            let _ = out.push(' ');
            if p.x == MAX_COORD {
                let _ = out.push('\n');
            }
        });
        out
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for State {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "State[{} lit]\n{}", self.lit_count(), self.dump().as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_protocol::Color;

    #[test]
    fn test_default_is_off() {
        let s = State::new();
        assert_eq!(s.at(Position::new(4, 4)), Button::default());
        assert_eq!(s.lit_count(), 0);
    }

    #[test]
    fn test_dead_corner_shares_slot() {
        let mut s = State::new();
        s.at_mut(Position::new(8, 0)).color = Color::RED;
        assert_eq!(s.at(Position::new(8, 1)).color, Color::RED);

        s.set(Position::new(8, 1), Button::with_color(Color::GREEN));
        assert_eq!(s.at(Position::new(8, 0)).color, Color::GREEN);
        assert_eq!(s.lit_count(), 1);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let mut s = State::new();
        s.at_mut(Position::new(20, 20)).color = Color::AMBER;
        assert_eq!(s.at(Position::new(8, 8)).color, Color::AMBER);
    }

    #[test]
    fn test_visit_order() {
        let s = State::new();
        let mut count = 0;
        let mut last: Option<Position> = None;
        s.visit(|p, _| {
            if let Some(prev) = last {
                assert!((p.y, p.x) > (prev.y, prev.x));
            }
            last = Some(p);
            count += 1;
        });
        assert_eq!(count, CELL_COUNT);
        assert_eq!(last, Some(Position::new(8, 8)));
    }

    #[test]
    fn test_visit_is_restartable() {
        let mut s = State::new();
        s.at_mut(Position::new(1, 1)).color = Color::new(1, 1);
        assert!(s.cells().eq(s.cells()));
    }

    #[test]
    fn test_dump() {
        let mut s = State::new();
        s.at_mut(Position::new(3, 5)).color = Color::new(2, 3);
        s.at_mut(Position::new(7, 7)).color = Color::new(1, 3);
        assert_eq!(
            s.dump().as_str(),
            ".. .. .. .. .. .. .. .. \n\
             .. .. .. .. .. .. .. .. .. \n\
             .. .. .. .. .. .. .. .. .. \n\
             .. .. .. .. .. .. .. .. .. \n\
             .. .. .. .. .. .. .. .. .. \n\
             .. .. .. O0 .. .. .. .. .. \n\
             .. .. .. .. .. .. .. .. .. \n\
             .. .. .. .. .. .. .. o0 .. \n\
             .. .. .. .. .. .. .. .. .. \n"
        );
    }

    #[test]
    fn test_dump_clamps_stored_color() {
        let mut s = State::new();
        s.at_mut(Position::new(0, 0)).color = Color::new(9, 1);
        assert!(s.dump().starts_with("0o "));
    }
}
