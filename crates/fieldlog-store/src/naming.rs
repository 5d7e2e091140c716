//! Log file naming.

/// Derive the log file name for a device display name.
///
/// Spaces become underscores and single/double quote characters are
/// stripped; case, unicode, and other punctuation pass through unchanged.
/// Distinct device names that normalize to the same string share a file;
/// collisions are not detected here.
///
/// # Examples
///
/// ```
/// use fieldlog_store::log_file_name;
///
/// assert_eq!(log_file_name("Proteus A"), "Proteus_A_sensor_data.csv");
/// assert_eq!(log_file_name("Proteus \"A\""), "Proteus_A_sensor_data.csv");
/// ```
pub fn log_file_name(device_name: &str) -> String {
    let clean: String = device_name
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    format!("{clean}_sensor_data.csv")
}
