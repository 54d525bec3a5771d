//! Built-in demo scenes.

use glint_renderer::{Color, Material, Scene, SceneResult, Sphere, Vec3};

use crate::cli::SceneChoice;

pub fn build(choice: SceneChoice) -> SceneResult<Scene> {
    match choice {
        SceneChoice::Materials => materials(0.3, 1.0),
        SceneChoice::Diffuse => diffuse(),
        SceneChoice::Mirror => materials(0.0, 0.0),
    }
}

/// Ground, a diffuse center sphere, and metal spheres to its right and left.
fn materials(right_fuzz: f32, left_fuzz: f32) -> SceneResult<Scene> {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0))?,
    )?);
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.8, 0.3, 0.3))?,
    )?);
    scene.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), right_fuzz)?,
    )?);
    scene.add(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.8, 0.8), left_fuzz)?,
    )?);
    Ok(scene)
}

fn diffuse() -> SceneResult<Scene> {
    let grey = Material::lambertian(Color::splat(0.5))?;
    Ok([
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey)?,
        Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, grey)?,
    ]
    .into_iter()
    .collect())
}
