const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a short request identifier used to correlate log lines
///
/// The identifier is 12 characters of uppercase letters and digits, produced by
/// `nanoid`. A request and its 401 retry share the same identifier.
///
/// # Examples
/// ```
/// use maestro_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
pub fn request_id() -> String {
    nanoid::nanoid!(12, &ALPHABET)
}
