#![cfg(feature = "obj-io")]

mod support;

use groundfov::{
    io::{IoError, ObjExport},
    placement::{Footprint, place_footprints},
};
use nalgebra::Point3;

#[test]
fn triangle_text_is_exact() {
    let mut obj = ObjExport::new();
    obj.add_triangle(
        "tri",
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.5, -2.25, 1.123456),
    )
    .unwrap();
    let expected = "#\n\
                    # object tri\n\
                    #\n\
                    \n\
                    v  0.0000 0.0000 0.0000\n\
                    v  1.0000 0.0000 0.0000\n\
                    v  0.5000 -2.2500 1.1235\n\
                    # 3 vertices\n\
                    \n\
                    o tri\n\
                    g tri\n\
                    f 1 2 3\n\
                    \n";
    assert_eq!(obj.to_obj_string(), expected);
}

#[test]
fn line_follows_triangle() {
    let mut obj = ObjExport::new();
    let o = Point3::origin();
    obj.add_triangle("t", o, o, o).unwrap();
    obj.add_line("edge", Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0))
        .unwrap();
    let text = obj.to_obj_string();
    let line_part = &text[text.find("# shape edge").unwrap() - 2..];
    let expected = "#\n\
                    # shape edge\n\
                    #\n\
                    \n\
                    v  1.0000 2.0000 3.0000\n\
                    v  4.0000 5.0000 6.0000\n\
                    # 2 vertices\n\
                    \n\
                    o edge\n\
                    g edge\n\
                    l 4 5\n\
                    \n";
    assert_eq!(line_part, expected);
}

#[test]
fn ground_view_export_counts() {
    let view = support::steep_view();
    let mut obj = ObjExport::new();
    obj.add_pyramid("fov", &view.pyramid).unwrap();
    obj.add_trapezoid("ground", &view.trapezoid).unwrap();
    let text = obj.to_obj_string();

    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("l ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("v  ")).count(), 4 * 3 + 4 * 2);
    assert_eq!(obj.vertex_count(), 20);
    for name in ["fov_sca", "fov_sab", "fov_sbd", "fov_sdc", "ground_ab", "ground_bd", "ground_dc", "ground_ca"] {
        assert!(text.contains(&format!("o {name}\n")), "missing {name}");
    }
    assert!(text.ends_with("l 19 20\n\n"));
}

#[test]
fn footprint_outlines() {
    let view = support::steep_view();
    let grid = place_footprints(&view.trapezoid, &Footprint::square(2.0).unwrap()).unwrap();
    let mut obj = ObjExport::new();
    obj.add_footprints("fp", &grid).unwrap();
    assert_eq!(obj.vertex_count(), grid.len() * 4 * 2);
    assert!(obj.to_obj_string().contains("o fp_0_3\n"));
}

#[test]
fn save_and_write_to_agree() -> Result<(), Box<dyn std::error::Error>> {
    let mut obj = ObjExport::new();
    obj.add_trapezoid("ground", &support::level_view().trapezoid)?;

    let path = std::env::temp_dir().join(format!("groundfov_obj_{}.obj", std::process::id()));
    obj.save(&path)?;
    let saved = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;

    let mut buffer = Vec::new();
    obj.write_to(&mut buffer)?;
    assert_eq!(saved.as_bytes(), buffer.as_slice());
    Ok(())
}

#[test]
fn bad_names_are_reported() {
    let mut obj = ObjExport::new();
    let err = obj
        .add_line("a\nb", Point3::origin(), Point3::origin())
        .unwrap_err();
    assert!(matches!(err, IoError::MalformedInput(_)));
}
