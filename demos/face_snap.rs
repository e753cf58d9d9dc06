use fidget_rig::*;

fn main() {
    let camera = Vec3::new(3.0, 2.5, 4.0);
    let mut rig = RigController::with_config(RigConfig::with_reduced_motion(true))
        .expect("default config is valid");

    let mut frames = 0;
    while rig.snap_status() != SnapStatus::Aligned && frames < 600 {
        rig.update(1.0 / 60.0, camera);
        frames += 1;
    }

    match rig.snap_target() {
        Some(target) => println!(
            "face {:?} aligned after {frames} frames (rolled: {}), orientation {:?}",
            target.face,
            target.rolled,
            rig.current_orientation()
        ),
        None => println!("no snap target after {frames} frames"),
    }
    rig.profiler().report();
}
