use std::env;

use serde_json::json;
use serde_json::Value;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

/// A `ServerInfo` message the way the backend broadcasts it: one running
/// server, one specialized server and one configured server that is stopped.
pub fn server_info_fixture() -> Value {
    return json!({
        "type": "ServerInfo",
        "servers": [
            {
                "name": "alpha",
                "output": "booting\r\nready",
                "active": true,
                "host": null,
                "specialization": null,
                "specialized_info": null
            },
            {
                "name": "survival",
                "output": "[12:00:01] [Server thread/INFO]: Starting minecraft server",
                "active": true,
                "host": null,
                "specialization": "Minecraft",
                "specialized_info": {
                    "player_count": 2,
                    "max_players": 20,
                    "ready": true,
                    "player_list": ["steve", "alex"]
                }
            },
            {
                "name": "beta",
                "output": "",
                "active": false,
                "host": null,
                "specialization": null,
                "specialized_info": null
            }
        ],
        "config": config_fixture()
    });
}

pub fn config_fixture() -> Value {
    return json!({
        "interface": "0.0.0.0",
        "port": "8080",
        "servers": [
            {
                "name": "alpha",
                "exe_path": "./alpha",
                "arguments": ["--nogui"],
                "working_dir": ".",
                "auto_start": true
            }
        ]
    });
}

pub fn theme_css_fixture() -> &'static str {
    return r#"
:root {
    --bg-dark: rgb(10, 10, 12);
    --bg: rgb(20, 20, 24);
    --text: #e0e0e0;
    --text-muted: #888;
    --highlight: rgb(162, 0, 255);
    --border: oklch(0.5 0.1 200);
    --danger: #ff5555;
    --warning: #ffa500;
    --success: #50fa7b;
}
"#
    .trim();
}
