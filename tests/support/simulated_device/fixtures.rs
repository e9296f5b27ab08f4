/// Apps installed on every simulated device
pub const APPS: &str = indoc::indoc! {r#"
    <?xml version="1.0" encoding="UTF-8" ?>
    <apps>
        <app id="tvinput.hdmi1" type="tvin" version="1.0.0">Nintendo Switch</app>
        <app id="12" type="appl" version="5.1.61000100">Netflix</app>
        <app id="2285" type="appl" version="6.20.0">Hulu</app>
        <app id="13" type="appl" version="14.0.2022090204">Prime Video</app>
        <app id="837" type="appl" version="2.21.110005078">YouTube</app>
    </apps>
"#};

pub const APP_IDS: [&str; 5] = ["tvinput.hdmi1", "12", "2285", "13", "837"];

pub const ACTIVE_APP: &str = indoc::indoc! {r#"
    <?xml version="1.0" encoding="UTF-8" ?>
    <active-app>
        <app id="2285" type="appl" version="6.20.0">Hulu</app>
    </active-app>
"#};

pub const TV_CHANNELS: &str = indoc::indoc! {"
    <?xml version=\"1.0\" encoding=\"UTF-8\" ?>
    <tv-channels>
        <channel>
            <number>3.1</number>
            <channel-id>3.1</channel-id>
            <name>WEAU-HD</name>
            <type>air-digital</type>
            <user-hidden>false</user-hidden>
            <user-favorite>true</user-favorite>
            <physical-channel>39</physical-channel>
            <physical-frequency>623000</physical-frequency>
        </channel>
        <channel>
            <number>9.1</number>
            <channel-id>9.1</channel-id>
            <name>ABC</name>
            <type>air-digital</type>
            <user-hidden>true</user-hidden>
            <physical-channel>9</physical-channel>
            <physical-frequency>189000</physical-frequency>
        </channel>
        <channel>
            <number>13.1</number>
            <channel-id>13.1</channel-id>
            <name>WEAU-SD</name>
            <type>air-digital</type>
            <physical-channel>13</physical-channel>
            <physical-frequency>213000</physical-frequency>
        </channel>
    </tv-channels>
"};

pub const ACTIVE_CHANNEL: &str = indoc::indoc! {"
    <?xml version=\"1.0\" encoding=\"UTF-8\" ?>
    <tv-channel>
        <channel>
            <number>3.1</number>
            <channel-id>3.1</channel-id>
            <name>WEAU-HD</name>
            <type>air-digital</type>
            <physical-channel>39</physical-channel>
            <physical-frequency>623000</physical-frequency>
            <active-input>true</active-input>
            <signal-state>valid</signal-state>
            <signal-mode>1080i</signal-mode>
            <signal-quality>94</signal-quality>
            <signal-strength>-52</signal-strength>
            <program-title>Jeopardy!</program-title>
            <program-description>Returning champion faces two challengers.</program-description>
            <program-ratings>TV-G</program-ratings>
            <program-has-cc>true</program-has-cc>
        </channel>
    </tv-channel>
"};

/// Start of a PNG file, enough to tell icons apart from XML
pub const ICON: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
