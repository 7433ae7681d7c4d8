use droidstick::axis::codes;
use droidstick::backends::{VirtualDevice, VirtualInputDevices};
use droidstick::{Axis, BackendConfig, JoystickContext, JoystickImpl, SourceFlags};
use std::sync::Arc;

fn context(devices: &VirtualInputDevices) -> Arc<JoystickContext<VirtualInputDevices>> {
    Arc::new(JoystickContext::new(devices.clone()))
}

#[test]
fn slots_never_share_a_device() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(10, "First"));
    devices.connect(VirtualDevice::gamepad(11, "Second"));
    let context = context(&devices);

    let mut first = JoystickImpl::new(Arc::clone(&context));
    let mut second = JoystickImpl::new(Arc::clone(&context));
    assert!(first.open(0));
    assert!(second.open(1));

    assert_eq!(first.device_id(), Some(10));
    assert_eq!(second.device_id(), Some(11));
    assert_eq!(context.lock().len(), 2);
}

#[test]
fn same_index_moves_past_claimed_devices() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(10, "First"));
    devices.connect(VirtualDevice::gamepad(11, "Second"));
    let context = context(&devices);

    let mut first = JoystickImpl::new(Arc::clone(&context));
    let mut again = JoystickImpl::new(Arc::clone(&context));
    assert!(first.open(0));
    assert!(again.open(0));
    assert_eq!(again.device_id(), Some(11));
}

#[test]
fn higher_index_skips_earlier_gamepads() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(10, "Only"));
    let context = context(&devices);

    let mut joystick = JoystickImpl::new(Arc::clone(&context));
    assert!(!joystick.open(1));
    assert!(joystick.open(0));
}

#[test]
fn ghost_ids_are_skipped() {
    let devices = VirtualInputDevices::new();
    devices.connect_ghost(4);
    devices.connect(VirtualDevice::gamepad(5, "Pad"));
    let mut joystick = JoystickImpl::new(context(&devices));

    assert!(joystick.open(0));
    assert_eq!(joystick.device_id(), Some(5));
}

#[test]
fn capabilities_come_from_motion_ranges() {
    let devices = VirtualInputDevices::new();
    devices.connect(
        VirtualDevice::gamepad(1, "Sticks")
            .with_axis_codes(&[codes::AXIS_X, codes::AXIS_Y, codes::AXIS_LTRIGGER, 42]),
    );
    let mut joystick = JoystickImpl::new(context(&devices));
    assert!(joystick.open(0));

    let caps = joystick.capabilities();
    assert!(caps.has_axis(Axis::X));
    assert!(caps.has_axis(Axis::Y));
    assert!(caps.has_axis(Axis::U));
    assert!(!caps.has_axis(Axis::Z));
    assert!(!caps.has_axis(Axis::PovX));
}

#[test]
fn unplugging_reports_disconnected_until_closed() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(7, "Pad"));
    let context = context(&devices);
    let mut joystick = JoystickImpl::new(Arc::clone(&context));
    assert!(joystick.open(0));
    assert!(joystick.update().connected);

    devices.disconnect(7);
    assert!(!joystick.update().connected);
    assert!(context.is_claimed(7));

    joystick.close();
    assert!(!context.is_claimed(7));
}

#[test]
fn attach_failure_is_not_fatal() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(7, "Pad"));
    let context = context(&devices);
    let mut joystick = JoystickImpl::new(Arc::clone(&context));

    devices.fail_attach(true);
    assert!(!joystick.open(0));

    devices.fail_attach(false);
    assert!(joystick.open(0));

    devices.fail_attach(true);
    assert!(!joystick.update().connected);

    devices.fail_attach(false);
    assert!(joystick.update().connected);
}

#[test]
fn missing_class_keeps_slot_closed() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(7, "Pad"));
    devices.fail_class_lookup(true);
    let context = context(&devices);
    let mut joystick = JoystickImpl::new(Arc::clone(&context));

    assert!(!joystick.open(0));
    assert!(context.lock().is_empty());
}

#[test]
fn events_show_up_in_snapshots() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(2, "Pad"));
    let context = context(&devices);
    let mut joystick = JoystickImpl::new(Arc::clone(&context));
    assert!(joystick.open(0));

    context.apply_motion(2, |code| if code == codes::AXIS_RZ { -0.25 } else { 0.0 });
    context.set_button(2, 4, true);

    let state = joystick.update();
    assert_eq!(state.axis(Axis::R), -25.0);
    assert!(state.button(4));
    assert!(!state.button(5));
}

#[test]
fn custom_source_mask_picks_keyboards() {
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::keyboard(3, "Keys"));
    let config = BackendConfig {
        joystick_count: 1,
        source_mask: SourceFlags::KEYBOARD,
        ..BackendConfig::default()
    };
    let context = Arc::new(JoystickContext::with_config(devices, config).unwrap());

    assert!(JoystickImpl::is_connected(&context, 0));
    assert!(!JoystickImpl::is_connected(&context, 1));

    let mut joystick = JoystickImpl::new(context);
    assert!(joystick.open(0));
    assert_eq!(joystick.identification().name, "Keys");
}

#[test]
fn long_ascii_names_are_not_truncated() {
    let name = "Generic USB Joystick With A Rather Long Product String 0123456789".repeat(4);
    let devices = VirtualInputDevices::new();
    devices.connect(VirtualDevice::gamepad(1, &name));
    let mut joystick = JoystickImpl::new(context(&devices));

    assert!(joystick.open(0));
    assert_eq!(joystick.identification().name, name);
}
