use tetros::Grid;

/// The markers assigned to placed pieces, cycled by piece index. Twelve
/// entries, so boards with more pieces than markers reuse letters.
static PALETTE: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L'];

/// What empty slots render as.
const EMPTY_SLOT: char = '.';

/// Renders a packed grid as text, one line per board row.
pub fn render(grid: &Grid) -> String {
    let mut output = String::with_capacity(grid.size() * (grid.size() + 1));

    for row in grid.rows() {
        for slot in row {
            output.push(match slot {
                Some(marker) => PALETTE[marker % PALETTE.len()],
                None => EMPTY_SLOT,
            });
        }

        output.push('\n');
    }

    output
}
