use serde::Serialize;

///One roster entry. Built fresh for each response and discarded once
///serialized - there is no id, no persistence and no shared instance.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Student;
    use serde_json::json;

    #[test]
    fn serialises_with_camel_case_field_names() {
        let student = Student::new("Mario", "Rossi");

        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({"firstName": "Mario", "lastName": "Rossi"})
        );
    }
}
