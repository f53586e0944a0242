use crate::crew::CreateTask;
use crate::passport::{Login, Register};

pub fn validate_login(login: &Login) -> Result<(), String> {
    if login.username.trim().is_empty() {
        return Err("username is required".into());
    }
    if login.password.trim().is_empty() {
        return Err("password is required".into());
    }
    Ok(())
}

pub fn validate_register(register: &Register) -> Result<(), String> {
    if register.username.trim().is_empty() {
        return Err("username is required".into());
    }
    if register.password.trim().is_empty() {
        return Err("password is required".into());
    }
    if register.display_name.trim().is_empty() {
        return Err("display name is required".into());
    }
    Ok(())
}

pub fn validate_new_task(task: &CreateTask) -> Result<(), String> {
    if task.title.trim().is_empty() {
        return Err("task title is required".into());
    }
    if let Some(priority) = &task.priority {
        match priority.as_str() {
            "Low" | "Medium" | "High" => {}
            other => return Err(format!("invalid priority '{other}'")),
        }
    }
    Ok(())
}

pub fn validate_max_members(value: i32) -> Result<(), String> {
    if value < 1 {
        return Err("team size must be at least 1".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let login = Login {
            username: "ana".into(),
            password: "hunter2".into(),
        };
        assert!(validate_login(&login).is_ok());

        let blank = Login {
            username: "  ".into(),
            password: "hunter2".into(),
        };
        assert!(validate_login(&blank).is_err());
    }

    #[test]
    fn register_requires_display_name() {
        let register = Register {
            username: "ana".into(),
            password: "hunter2".into(),
            display_name: String::new(),
        };
        assert_eq!(
            validate_register(&register),
            Err("display name is required".into())
        );
    }

    #[test]
    fn task_priority_must_be_known() {
        let task = CreateTask {
            title: "Scout the vault".into(),
            priority: Some("Urgent".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_new_task(&task),
            Err("invalid priority 'Urgent'".into())
        );

        let task = CreateTask {
            title: "Scout the vault".into(),
            priority: Some("High".into()),
            ..Default::default()
        };
        assert!(validate_new_task(&task).is_ok());
    }

    #[test]
    fn max_members_must_be_positive() {
        assert!(validate_max_members(0).is_err());
        assert!(validate_max_members(1).is_ok());
    }
}
