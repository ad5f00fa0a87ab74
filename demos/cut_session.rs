//! Cut session walkthrough: builds each blank, applies a few cuts and prints
//! the resulting bounds and cut list.
//!
//! Usage:
//! ```text
//! cargo run --example cut_session
//! RUST_LOG=opalcut=debug cargo run --example cut_session
//! ```

use opalcut::operations::creation::ShapeSpec;
use opalcut::operations::cut::{CutSide, CutSpec, MakeCutPreview};
use opalcut::operations::query::{Aabb, BoundingBox, IsClosed, Volume};
use opalcut::{CutSession, Result};

fn print_bounds(label: &str, aabb: &Aabb) {
    let size = aabb.size();
    println!(
        "  {label}: {:.2} x {:.2} x {:.2} mm (min {:.2}, {:.2}, {:.2})",
        size.x, size.y, size.z, aabb.min.x, aabb.min.y, aabb.min.z
    );
}

fn run(session: &mut CutSession, shape: ShapeSpec, cuts: &[CutSpec]) -> Result<()> {
    println!("{shape}");
    session.generate(shape)?;
    print_bounds("base", &session.bounding_box()?);

    for &cut in cuts {
        match session.add_cut(cut) {
            Ok(_) => {
                let preview = MakeCutPreview::new(cut)
                    .fit_to(&session.bounding_box()?)
                    .execute()?;
                print_bounds("preview", &BoundingBox::new(&preview).execute()?);
            }
            Err(e) => println!("  rejected ({cut}): {e}"),
        }
    }

    if let Some(mesh) = session.current_mesh() {
        println!(
            "  result: {} triangles, volume {:.1} mm3, closed: {}",
            mesh.triangle_count(),
            Volume::new(mesh).execute(),
            IsClosed::new(mesh).execute()
        );
    }
    print_bounds("current", &session.bounding_box()?);
    for (i, label) in session.history_labels().iter().enumerate() {
        println!("  {i}: {label}");
    }

    if !session.history().is_empty() {
        session.remove_cut(0)?;
        println!("  after removing cut 0:");
        print_bounds("current", &session.bounding_box()?);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for opalcut.
    // Override with RUST_LOG env var (e.g. RUST_LOG=opalcut=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("opalcut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = CutSession::new();

    run(
        &mut session,
        ShapeSpec::Box {
            length: 50.0,
            width: 30.0,
            height: 20.0,
        },
        &[
            CutSpec::new(0.0, 0.0, CutSide::KeepAbove),
            CutSpec::new(30.0, 6.0, CutSide::KeepBelow),
            CutSpec::new(0.0, 100.0, CutSide::KeepAbove),
        ],
    )?;

    run(
        &mut session,
        ShapeSpec::Revolved {
            length: 60.0,
            width: 30.0,
            height: 20.0,
        },
        &[
            CutSpec::new(-45.0, 2.0, CutSide::KeepBelow),
            CutSpec::new(90.0, 10.0, CutSide::KeepBelow),
        ],
    )?;

    run(
        &mut session,
        ShapeSpec::Cylinder {
            diameter: 20.0,
            height: 50.0,
        },
        &[CutSpec::new(0.0, 0.0, CutSide::KeepBelow)],
    )?;

    Ok(())
}
