// Host-side tests for option defaults and the capability gate.

use elevator::core::{vertical_offset_of, AudioSource, Capabilities, ElevatorOptions, RawOptions};

#[test]
fn empty_bag_gets_documented_defaults() {
    let opts: ElevatorOptions<u32> = RawOptions::default().with_defaults();
    assert!(opts.loop_audio);
    assert!(opts.preload_audio);
    assert_eq!(opts.main_audio, AudioSource::Off);
    assert_eq!(opts.end_audio, AudioSource::Off);
    assert!(opts.start_callback.is_none());
    assert!(opts.end_callback.is_none());
    assert!(opts.target_element.is_none());
    assert_eq!(opts.custom_duration(), None);
    assert_eq!(opts.padding(), 0.0);
}

#[test]
fn explicit_falsy_values_survive_the_merge() {
    let raw = RawOptions::<u32> {
        preload_audio: Some(false),
        loop_audio: Some(false),
        main_audio: Some(AudioSource::Off),
        ..RawOptions::default()
    };
    let opts = raw.with_defaults();
    assert!(!opts.preload_audio);
    assert!(!opts.loop_audio);
    assert!(opts.main_audio.is_off());
}

#[test]
fn explicit_values_are_kept() {
    let raw = RawOptions::<u32> {
        target_element: Some(9),
        duration: Some(2000.0),
        vertical_padding: Some(25.0),
        main_audio: Some(AudioSource::Url("music.mp3".into())),
        end_audio: Some(AudioSource::Url("ding.mp3".into())),
        start_callback: Some(Box::new(|| {})),
        ..RawOptions::default()
    };
    let opts = raw.with_defaults();
    assert_eq!(opts.target_element, Some(9));
    assert_eq!(opts.custom_duration(), Some(2000.0));
    assert_eq!(opts.padding(), 25.0);
    assert_eq!(opts.main_audio.url(), Some("music.mp3"));
    assert_eq!(opts.end_audio.url(), Some("ding.mp3"));
    assert!(opts.start_callback.is_some());
    assert!(opts.end_callback.is_none());
}

#[test]
fn falsy_duration_is_not_custom() {
    let zero = RawOptions::<u32> {
        duration: Some(0.0),
        ..RawOptions::default()
    }
    .with_defaults();
    assert_eq!(zero.custom_duration(), None);

    let nan = RawOptions::<u32> {
        duration: Some(f64::NAN),
        ..RawOptions::default()
    }
    .with_defaults();
    assert_eq!(nan.custom_duration(), None);
}

#[test]
fn empty_audio_url_counts_as_off() {
    assert!(AudioSource::Url(String::new()).is_off());
    assert_eq!(AudioSource::Url(String::new()).url(), None);
}

#[test]
fn capabilities_gate_requires_everything() {
    assert!(Capabilities::ALL.is_complete());
    assert!(Capabilities::ALL.missing().is_empty());

    let no_audio = Capabilities::detect(|name| name != "Audio");
    assert!(!no_audio.is_complete());
    assert_eq!(no_audio.missing(), vec!["Audio"]);

    let nothing = Capabilities::detect(|_| false);
    assert_eq!(nothing, Capabilities::default());
    assert_eq!(nothing.missing().len(), 3);
}

#[test]
fn vertical_offset_sums_parent_chain() {
    // (offset_top, parent index)
    let tree = [(10.0, None), (200.0, Some(0)), (35.0, Some(1))];
    let total = vertical_offset_of(&2usize, |i| tree[*i].0, |i| tree[*i].1);
    assert_eq!(total, 245.0);
    let root = vertical_offset_of(&0usize, |i| tree[*i].0, |i| tree[*i].1);
    assert_eq!(root, 10.0);
}
