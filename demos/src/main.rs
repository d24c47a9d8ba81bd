//! Command-line navigation-mesh demo.
//!
//! Run: cargo run --bin navbox-demo [sx sy dx dy]
//!
//! Without arguments a few fixed queries and some random ones are run
//! against the built-in floor plan with every search strategy. Set
//! `RUST_LOG=debug` (or `trace`) to see the search diagnostics.

use navbox_core::Point;
use navbox_demos::{describe, floor_plan, random_point};
use navbox_paths::{Pathfinder, SearchConfig, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

const RANDOM_QUERIES: usize = 3;

fn main() {
    env_logger::init();

    let mesh = match floor_plan() {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!("floor plan has {} regions", mesh.len());

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();

    let queries = if let [sx, sy, dx, dy] = args[..] {
        vec![(Point::new(sx, sy), Point::new(dx, dy))]
    } else {
        let mut queries = vec![
            (Point::new(0.2, 0.5), Point::new(39.5, 9.5)),
            (Point::new(1.0, 9.0), Point::new(35.0, 29.0)),
            (Point::new(5.0, 5.0), Point::new(55.0, 5.0)),
            (Point::new(5.0, 5.0), Point::new(70.0, 5.0)),
        ];
        let mut rng = StdRng::seed_from_u64(0x6e6176);
        for _ in 0..RANDOM_QUERIES {
            if let (Some(a), Some(b)) = (random_point(&mut rng, &mesh), random_point(&mut rng, &mesh)) {
                queries.push((a, b));
            }
        }
        queries
    };

    let mut report = String::new();
    for strategy in [Strategy::Bidirectional, Strategy::AStar, Strategy::BreadthFirst] {
        report.clear();
        let finder = Pathfinder::new(SearchConfig::default().with_strategy(strategy));
        for &(source, dest) in &queries {
            let result = finder.find_path(source, dest, &mesh);
            if let Err(e) = describe(&mut report, source, dest, &result) {
                log::error!("failed to format report: {e}");
            }
        }
        println!("== {strategy:?}");
        print!("{report}");
    }
}
