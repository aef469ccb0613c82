//! Small tour of the locomath API.
//!
//! Run with `RUST_LOG=debug` to see which kernel sets this build selected, and
//! pass a matrix as 16 row-major numbers to have it parsed and inverted:
//!
//! ```text
//! cargo run --release -- 2 0 0 1  0 2 0 2  0 0 2 3  0 0 0 1
//! ```

use locomath::dispatch::log_backend;
use locomath::{Matrix4d, Matrix4f, Vector2f, Vector4f};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    log_backend();
    tracing::info!("kernel set: {}", locomath::backend());

    // Scale, rotate a quarter turn about z, then move
    let model = Matrix4f::translation(1.0, 2.0, 3.0)
        * Matrix4f::rotation_z(std::f32::consts::FRAC_PI_2)
        * Matrix4f::scale_uniform(2.0);
    let point = Vector4f::new(1.0, 0.0, 0.0, 1.0);

    println!("model = {model:.3}");
    println!("model * {point:.1} = {:.3}", model * point);
    println!("det(model) = {:.3}", model.determinant());

    let uv = Vector2f::new(3.0, 4.0);
    println!("|{uv:.1}| = {:.1}, normalized {:.2}", uv.length(), uv.normalized());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return;
    }

    match args.join(" ").parse::<Matrix4d>() {
        Ok(mat) => {
            let det = mat.determinant();
            println!("input = {mat:.4}");
            println!("det = {det:.6}");
            if det == 0.0 {
                tracing::warn!("matrix is singular, its inverse is not finite");
            }
            println!("inverse = {:.6}", mat.inverse());
        }
        Err(error) => tracing::error!("cannot read matrix: {error}"),
    }
}
