/// Tile labels are u8 and the UI draws square grids, so the dimension is
/// capped well below the label range.
pub fn validate_board_size(size: usize) -> Result<(), String> {
    if size < 2 {
        return Err(format!("Board size must be at least 2, got {}", size));
    }
    if size > 6 {
        return Err(format!("Board size must not exceed 6, got {}", size));
    }
    Ok(())
}
