//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    let header = format!("# Starfield Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n");
    header + r##"# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Starfield"
# width = 1280           # 320-7680
# height = 720           # 240-4320
# transparent = false
# background = "#000000"

[camera]
# fov_degrees = 75.0     # 10-150
# near = 0.1
# far = 1000.0           # must be greater than near
# distance = 10.0        # 1-100

[particles]
# size = 0.5             # 0.01-5.0
# opacity = 0.4          # 0.0-1.0
# color = "#ffffff"
# sprite = "/path/to/sprite.png"  # default: a bold "$" glyph
# seed = 42              # fixed spawn layout

[logo]
# color = "#eeeeee"
# emissive = "#222222"
# metalness = 0.9        # 0.0-1.0
# roughness = 0.1        # 0.0-1.0

[lighting]
# ambient = 0.3          # 0.0-10.0
# directional = 1.5      # 0.0-10.0
# directional_position = [5.0, 10.0, 7.5]
# point = 0.5            # 0.0-10.0
# point_position = [-5.0, -5.0, 5.0]

[bloom]
# enabled = true
# strength = 1.2         # 0.0-3.0
# radius = 0.5           # 0.0-1.0
# threshold = 0.0        # 0.0-1.0
# passes = 1             # 1-5

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
