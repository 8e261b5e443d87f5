/// Reference scoring scenario: (system, threat level, weight).
pub const SCENARIO_ROWS: &[(&str, f64, f64)] = &[
    ("Atmosphere", 0.53, 0.20),
    ("Oceans", 0.62, 0.20),
    ("Forests & Biodiversity", 0.56, 0.20),
    ("Soil & Agriculture", 0.41, 0.15),
    ("Water Systems", 0.49, 0.15),
    ("Feedback Risk", 0.65, 0.10),
];

pub const SCENARIO_SUBSCORES: [f64; 6] = [47.0, 38.0, 44.0, 59.0, 51.0, 35.0];
pub const SCENARIO_WEIGHTED: [f64; 6] = [9.4, 7.6, 8.8, 8.85, 7.65, 3.5];
pub const SCENARIO_TOTAL: f64 = 45.8;

/// Tail of NOAA GML `co2_mm_mlo.csv`: comment block, header, monthly rows.
pub const CO2_CSV: &str = "\
# --------------------------------------------------------------
# USE OF NOAA GML DATA
#
# These data are made freely available to the public and the
# scientific community in the belief that their wide dissemination
# will lead to greater understanding and new scientific insights.
# --------------------------------------------------------------
year,month,decimal date,average,deseasonalized,ndays,sdev,unc
2024,1,2024.0417,422.80,422.54,27,0.71,0.26
2024,2,2024.1250,424.55,423.67,27,0.65,0.24
2024,3,2024.2083,425.38,423.79,20,0.62,0.26
2024,4,2024.2917,426.57,423.82,24,1.01,0.39
";

/// Same feed where the newest month has not been filled in yet.
pub const CO2_CSV_TRAILING_MISSING: &str = "\
# comment
year,month,decimal date,average,deseasonalized,ndays,sdev,unc
2024,3,2024.2083,425.38,423.79,20,0.62,0.26
2024,4,2024.2917,-99.99,-99.99,-1,-9.99,-0.99
";

/// ERDDAP griddap CSV of an OISST field: header, units row, grid cells (land is NaN).
pub const SST_CSV: &str = "\
time,zlev,latitude,longitude,sst
UTC,m,degrees_north,degrees_east,degree_C
2024-05-01T12:00:00Z,0.0,-9.875,-179.875,28.5
2024-05-01T12:00:00Z,0.0,-9.875,-174.875,NaN
2024-05-01T12:00:00Z,0.0,0.125,-179.875,29.1
2024-05-01T12:00:00Z,0.0,0.125,-174.875,27.76
";

/// Expected spatial mean of `SST_CSV`, rounded to two decimals.
pub const SST_CSV_MEAN: f64 = 28.45;

/// GFW data API query response summing tree-cover loss for one year.
pub const GFW_JSON: &str = r#"{"data":[{"area__ha":812345.6}],"status":"success"}"#;

/// Config with the oceans system toggled to its fixed placeholder.
pub const SAMPLE_CONFIG_TOML: &str = r#"
[server]
host = "0.0.0.0"
port = 8080

[sources]
sst_max_attempts = 3

[[systems]]
name = "Atmosphere"
weight = 0.20
simulation_default = 0.72
threat = { kind = "live", indicator = "co2", low = 350, high = 450 }

[[systems]]
name = "Oceans"
weight = 0.20
threat = { kind = "fixed", level = 0.62 }

[[systems]]
name = "Forests & Biodiversity"
weight = 0.20
threat = { kind = "live", indicator = "forest_loss", low = 0, high = 1000000 }

[[systems]]
name = "Soil & Agriculture"
weight = 0.15
threat = { kind = "fixed", level = 0.41 }

[[systems]]
name = "Water Systems"
weight = 0.15
threat = { kind = "fixed", level = 0.49 }

[[systems]]
name = "Feedback Risk"
weight = 0.10
threat = { kind = "fixed", level = 0.65 }
"#;
