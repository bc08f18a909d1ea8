use tetros::{Packer, Shape};

fn shape(text: &[&str]) -> Shape {
    let rows: Vec<Vec<bool>> = text
        .iter()
        .map(|row| row.chars().map(|ch| ch == '#').collect())
        .collect();

    Shape::from_rows(&rows).unwrap()
}

fn main() {
    env_logger::init();

    let pieces = vec![
        shape(&["####"]),
        shape(&["##", "##"]),
        shape(&["###", ".#."]),
        shape(&[".##", "##."]),
        shape(&["#.", "#.", "##"]),
    ];

    let packer = Packer::new();
    let packing = packer.pack(&pieces).unwrap();

    println!(
        "Packed {} pieces into a {}x{} board on attempt {}:",
        pieces.len(),
        packing.grid().size(),
        packing.grid().size(),
        packing.attempts()
    );

    for row in packing.grid().rows() {
        let line: String = row
            .iter()
            .map(|slot| match slot {
                Some(marker) => std::char::from_digit(*marker as u32, 10).unwrap_or('?'),
                None => '.',
            })
            .collect();

        println!("{}", line);
    }
}
