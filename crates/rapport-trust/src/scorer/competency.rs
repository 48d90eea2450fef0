use rapport_core::models::Role;

/// Competency of the human for one subtask.
///
/// Formula: `(knowledge(role) + goal_reached + attitude) / 3`
///
/// # Examples
///
/// ```
/// use rapport_core::models::Role;
/// use rapport_trust::scorer::competency;
///
/// let c = competency::calculate(Role::Validator, true, 1.0);
/// assert!((c - 1.0).abs() < 1e-12);
/// ```
pub fn calculate(role: Role, goal_reached: bool, attitude: f64) -> f64 {
    let skill = if goal_reached { 1.0 } else { 0.0 };
    (role.knowledge() + skill + attitude) / 3.0
}
