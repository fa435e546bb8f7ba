use super::{Certification, Goal, HistoryEntry, HobbyCategory, Project, Skill};

#[tauri::command]
pub fn get_skills() -> Vec<Skill> {
    super::skills()
}

#[tauri::command]
pub fn get_certifications() -> Vec<Certification> {
    super::certifications()
}

#[tauri::command]
pub fn get_goals() -> Vec<Goal> {
    super::goals()
}

#[tauri::command]
pub fn get_projects() -> Vec<Project> {
    super::projects()
}

#[tauri::command]
pub fn get_life_history() -> Vec<HistoryEntry> {
    super::life_history()
}

#[tauri::command]
pub fn get_hobbies() -> Vec<HobbyCategory> {
    super::hobbies()
}
