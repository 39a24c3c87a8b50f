use glam::Vec3;

use crate::registry::Material;

/// Image files loaded at startup, relative to the texture directory, and their tags.
///
/// The order matters: an entry's index is the texture unit it ends up bound to.
pub const SCENE_TEXTURES: [(&str, &str); 11] = [
    ("Wood_table.png", "desk"),
    ("lamp_body.jpg", "bronze"),
    ("metal_head.jpg", "crome"),
    ("rubber_holds.jpg", "rubber"),
    ("book_cover.jpg", "cover"),
    ("book_fabric.jpg", "fabric"),
    ("fabric_black.jpg", "fabricB"),
    ("clock_face.jpg", "clockF"),
    ("ceiling.jpg", "ceilingT"),
    ("planks.jpg", "planksW"),
    ("marble.jpg", "marble_floor"),
];

/// The materials of every surface in the room.
pub fn scene_materials() -> Vec<Material> {
    let wood = Vec3::new(0.8, 0.5, 0.2);
    // paper and cloth barely reflect
    let dull = Vec3::splat(0.1);

    vec![
        Material::new("desk", wood, Vec3::splat(0.5), 32.0),
        Material::new("lamp", Vec3::splat(0.8), Vec3::splat(0.5), 64.0),
        Material::new("lamp_head", Vec3::splat(0.5), Vec3::splat(0.8), 32.0),
        Material::new("lamp_base", Vec3::splat(0.7), Vec3::splat(0.4), 16.0),
        Material::new("rubber", Vec3::splat(0.6), Vec3::splat(0.3), 16.0),
        Material::new("cover", Vec3::splat(0.5), Vec3::new(0.1, 0.1, 0.2), 1.0),
        Material::new("fabric", Vec3::splat(0.5), dull, 1.0),
        Material::new("fabricB", Vec3::splat(1.0), dull, 0.4),
        Material::new("clockF", Vec3::splat(1.0), dull, 0.4),
        Material::new("marbleF", wood, Vec3::splat(1.0), 64.0),
        Material::new("planksW", wood, Vec3::splat(0.5), 0.5),
        Material::new("ceilingT", wood, Vec3::splat(0.5), 5.0),
    ]
}
