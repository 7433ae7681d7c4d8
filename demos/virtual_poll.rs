//! Polls a virtual gamepad at ~60 Hz, unplugging it halfway through.

use droidstick::backends::{VirtualDevice, VirtualInputDevices};
use droidstick::{Axis, JoystickContext, JoystickManager};
use std::sync::Arc;
use std::time::Duration;

fn main() {
    droidstick::logger::init();

    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(1, "Virtual Controller").with_ids(0x054c, 0x09cc));

    let context = Arc::new(JoystickContext::new(devices.clone()));
    let mut manager = JoystickManager::new(Arc::clone(&context));

    for frame in 0..120u32 {
        let t = frame as f32 / 60.0;
        context.apply_motion(1, |code| if code == Axis::X.to_android() { t.sin() } else { 0.0 });
        context.set_button(1, 0, frame % 30 < 15);

        if frame == 90 {
            devices.disconnect(1);
        }

        manager.update();

        if frame % 15 == 0 {
            if manager.is_connected(0) {
                println!(
                    "frame {frame:3}: {} x={:6.1} a={}",
                    manager.identification(0),
                    manager.axis_position(0, Axis::X),
                    manager.is_button_pressed(0, 0)
                );
            } else {
                println!("frame {frame:3}: no joystick");
            }
        }

        std::thread::sleep(Duration::from_millis(16));
    }
}
