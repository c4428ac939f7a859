//! Basic example of the word search and square addition

use recursion_core::{add, Board, Finder, Quad, RecordingSink, TraceRecord};

fn main() {
    let board = Board::parse(
        "N C A N E
         O U I O P
         Z Q Z O N
         F A D P L
         E D E A Z",
    )
    .expect("board has 25 letters");

    println!("Board:");
    println!("{}\n", board);

    for word in ["NOON", "NOPE", "CANON", "QUINE", "FADED"] {
        match recursion_core::find_path(&board, word) {
            Some(path) => {
                let steps: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                println!("{:<6} found: {}", word, steps.join(" -> "));
            }
            None => println!("{:<6} not found", word),
        }
    }

    // Watch the search back out of a dead end
    println!("\n--- Search steps for FADED ---\n");
    let mut finder = Finder::with_sink(RecordingSink::new());
    finder.find(&board, "FADED");
    println!("{}", TraceRecord::header());
    for record in finder.sink().records() {
        println!("{}", record);
    }

    println!("\n--- Adding split squares ---\n");
    let s1: Quad = "[0, [1, 1, 1, 0], [0, 0, 0, 0], 1]".parse().expect("valid square");
    let s2: Quad = "[1, [1, 0, 1, [0, 0, 1, 1]], [1, 0, 1, 0], 1]"
        .parse()
        .expect("valid square");
    println!("  {}", s1);
    println!("+ {}", s2);
    println!("= {}", add(&s1, &s2));
}
