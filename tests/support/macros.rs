#[macro_use]
macro_rules! device_info {
    ($name:expr, $serial:expr, $is_tv:expr, $ecp_mode:expr, $search:expr) => {
        format!(indoc::indoc! {
            r#"<?xml version="1.0" encoding="UTF-8" ?>
            <device-info>
                <udn>29380007-0800-1025-80a4-{}</udn>
                <serial-number>{}</serial-number>
                <vendor-name>Roku</vendor-name>
                <model-number>3930X</model-number>
                <friendly-device-name>Simulated Roku</friendly-device-name>
                <friendly-model-name>Simulated Roku Model</friendly-model-name>
                <wifi-mac>d8:31:34:d1:b2:b1</wifi-mac>
                <software-version>11.5.0</software-version>
                <user-device-name>{}</user-device-name>
                <user-device-location>Den</user-device-location>
                <ui-resolution>1080p</ui-resolution>
                <is-tv>{}</is-tv>
                <power-mode>PowerOn</power-mode>
                <supports-private-listening>true</supports-private-listening>
                <headphones-connected>false</headphones-connected>
                <developer-enabled>false</developer-enabled>
                <search-enabled>{}</search-enabled>
                <ecp-setting-mode>{}</ecp-setting-mode>
            </device-info>"#
        },
        $serial.to_lowercase(), $serial, $name, $is_tv, $search, $ecp_mode
        )
    };
}
