// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[yare::parameterized(
    https    = { "https://forge.example.com/api", "wss://forge.example.com/api/events" },
    http     = { "http://localhost:8080", "ws://localhost:8080/events" },
    trailing = { "https://forge.example.com/api/", "wss://forge.example.com/api/events" },
)]
fn ws_url_derivation(base: &str, expected: &str) {
    assert_eq!(derive_ws_url(base), expected);
}

#[test]
fn flags_win_over_everything() {
    let settings = Settings::resolve(
        Some("https://a.example/api".into()),
        Some("tok".into()),
        Some("wss://b.example/stream".into()),
    )
    .unwrap();
    assert_eq!(settings.base_url, "https://a.example/api");
    assert_eq!(settings.ws_url, "wss://b.example/stream");
}
