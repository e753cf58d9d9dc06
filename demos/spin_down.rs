use fidget_rig::*;

fn main() {
    let mut rig = RigController::new();
    let camera = Vec3::new(3.0, 2.5, 4.0);

    rig.add_listener(|kind: InteractionKind| println!("feedback: {kind:?}"));

    // Flick the rig to the right and let it coast.
    rig.on_pointer_down(Vec2::new(400.0, 300.0));
    for step in 1..=5 {
        rig.on_pointer_moved_to(Vec2::new(400.0 + step as f32 * 18.0, 300.0 - step as f32 * 4.0));
    }
    rig.on_pointer_up();

    for frame in 0..180 {
        let report = rig.update(1.0 / 60.0, camera);
        if frame % 20 == 0 {
            let (yaw, pitch, _) = PitchClamp::decompose(report.orientation);
            println!(
                "frame {frame:3}: yaw {yaw:+.3} pitch {pitch:+.3} speed {:.3} snap {:?}",
                rig.velocity().speed(),
                rig.snap_status()
            );
        }
    }
}
