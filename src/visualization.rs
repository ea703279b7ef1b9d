//! 3D visualization of snake foldings using kiss3d.

use kiss3d::prelude::*;

use snakecube::solution::SolutionRecord;

/// Returns the display color for a cell: the starting cell gets white, runs cycle
/// through a fixed palette so neighbouring runs stay distinguishable.
fn segment_color(segment: Option<usize>) -> Color {
    const PALETTE: [(f32, f32, f32); 6] = [
        (1.0, 0.2, 0.2), // red
        (0.2, 1.0, 0.2), // green
        (0.2, 0.2, 1.0), // blue
        (1.0, 1.0, 0.2), // yellow
        (1.0, 0.2, 1.0), // magenta
        (0.2, 1.0, 1.0), // cyan
    ];
    match segment {
        None => Color::new(1.0, 1.0, 1.0, 1.0),
        Some(index) => {
            let (r, g, b) = PALETTE[index % PALETTE.len()];
            Color::new(r, g, b, 1.0)
        }
    }
}

/// Represents a rendered cube in the 3D scene.
struct RenderedCube {
    /// The kiss3d scene node for this cube.
    node: SceneNode3d,
    /// The cube's position when not exploded.
    base_position: Vec3,
    /// Direction this cube drifts in when the snake is pulled apart.
    explosion_direction: Vec3,
}

/// Builds the 3D scene for one folding.
///
/// Solver coordinates map x->X, y->Y, z->Z in world units, with the cube centered
/// on the origin. Each cube drifts away from the center along the centroid of the
/// run it belongs to.
fn build_scene<const DIM: usize>(
    scene: &mut SceneNode3d,
    solution: &SolutionRecord,
) -> Vec<RenderedCube> {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    /// Spacing between grid cells.
    const CELL_SPACING: f32 = 1.0;

    let center_offset = -((DIM - 1) as f32) / 2.0;
    let world = |(x, y, z): (i32, i32, i32)| {
        Vec3::new(
            x as f32 * CELL_SPACING + center_offset,
            y as f32 * CELL_SPACING + center_offset,
            z as f32 * CELL_SPACING + center_offset,
        )
    };

    let cells: Vec<_> = solution.as_solution().path().collect();

    // run centroids for explosion direction; the start cell moves with run 0
    let mut sums = vec![(Vec3::ZERO, 0.0f32); solution.moves.len().max(1)];
    for &(segment, coord) in &cells {
        let entry = &mut sums[segment.unwrap_or(0)];
        entry.0 += world(coord);
        entry.1 += 1.0;
    }

    cells
        .into_iter()
        .map(|(segment, coord)| {
            let base_position = world(coord);
            let (sum, count) = sums[segment.unwrap_or(0)];
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(segment_color(segment))
                .set_position(base_position);
            RenderedCube {
                node,
                base_position,
                explosion_direction: (sum / count).normalize_or_zero(),
            }
        })
        .collect()
}

/// Displays all foldings in an interactive 3D viewer.
pub fn display<const DIM: usize>(solutions: Vec<SolutionRecord>) {
    pollster::block_on(display_async::<DIM>(solutions));
}

async fn display_async<const DIM: usize>(solutions: Vec<SolutionRecord>) {
    if solutions.is_empty() {
        println!("No solutions to display");
        return;
    }

    let num_solutions = solutions.len();
    let mut current_solution_index = 0;

    let mut window = Window::new(&format!(
        "Solution 1/{} - [Left/Right] navigate, [Up/Down] explode, [R] reset",
        num_solutions
    ))
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(3.0 * DIM as f32);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut rendered_cubes = build_scene::<DIM>(&mut scene, &solutions[current_solution_index]);

    // how far runs drift apart (0.0 = folded)
    let mut explosion_amount: f32 = 0.0;
    const EXPLOSION_SPEED: f32 = 0.05;
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => explosion_amount = 0.0,
                        Key::Right => {
                            current_solution_index = (current_solution_index + 1) % num_solutions;
                            needs_rebuild = true;
                        }
                        Key::Left => {
                            current_solution_index = current_solution_index
                                .checked_sub(1)
                                .unwrap_or(num_solutions - 1);
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            for mut cube in rendered_cubes.drain(..) {
                cube.node.remove();
            }
            rendered_cubes = build_scene::<DIM>(&mut scene, &solutions[current_solution_index]);
            window.set_title(&format!(
                "Solution {}/{} - [Left/Right] navigate, [Up/Down] explode, [R] reset",
                current_solution_index + 1,
                num_solutions
            ));
            needs_rebuild = false;
        }

        for cube in &mut rendered_cubes {
            cube.node.set_position(
                cube.base_position + cube.explosion_direction * explosion_amount * 2.0,
            );
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
