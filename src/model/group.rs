use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeachingMode {
    TeacherLed,
    Balanced,
}

impl TeachingMode {
    pub fn label(self) -> &'static str {
        match self {
            TeachingMode::TeacherLed => "teacher-led",
            TeachingMode::Balanced => "balanced",
        }
    }
}

// slot order is display only; the teacher is tracked by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub members: Vec<usize>,
    pub mode: TeachingMode,
    pub teacher: Option<usize>,
}

impl Group {
    pub fn pair(first: usize, second: usize) -> Self {
        Self {
            members: vec![first, second],
            mode: TeachingMode::Balanced,
            teacher: None,
        }
    }

    pub fn trio(members: [usize; 3]) -> Self {
        Self {
            members: members.to_vec(),
            mode: TeachingMode::Balanced,
            teacher: None,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.members.len() == 2
    }

    pub fn is_trio(&self) -> bool {
        self.members.len() == 3
    }
}
