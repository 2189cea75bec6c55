#[cfg(test)]
mod model_tests {
    use crate::models::{
        derive_status, ConfigFile, DeployPlan, DeployStep, DevOs, Project, ProjectStatus,
        ProjectSummary, ProjectType,
    };
    use crate::WizardError;

    fn create_test_step(id: &str, is_completed: bool) -> DeployStep {
        DeployStep {
            id: id.to_string(),
            title: format!("Step {id}"),
            description: "Do the thing".to_string(),
            commands: Some(vec!["npm run build".to_string()]),
            config_files: Some(vec![ConfigFile {
                file_name: "vercel.json".to_string(),
                content: "{}".to_string(),
                language: "json".to_string(),
            }]),
            is_completed,
            notes: Some("Check the logs".to_string()),
        }
    }

    fn create_test_project(steps: Vec<DeployStep>) -> Project {
        let mut project = Project {
            id: "project-1".to_string(),
            name: "Blog".to_string(),
            description: "A personal blog".to_string(),
            project_type: ProjectType::WebApp,
            tech_stack: vec!["React".to_string(), "Vite".to_string()],
            backend: None,
            database: Some("Postgres".to_string()),
            hosting_target: "Vercel".to_string(),
            os: DevOs::Linux,
            created_at: 1_735_689_600_000,
            status: ProjectStatus::Planning,
            plan: None,
        };
        project.attach_plan(DeployPlan {
            steps,
            prerequisites: vec!["Node.js 20".to_string()],
            warnings: vec![],
        });
        project
    }

    #[test]
    fn test_derive_status() {
        let open = DeployPlan {
            steps: vec![create_test_step("a", true), create_test_step("b", false)],
            ..Default::default()
        };
        assert_eq!(derive_status(&open), ProjectStatus::InProgress);

        let done = DeployPlan {
            steps: vec![create_test_step("a", true), create_test_step("b", true)],
            ..Default::default()
        };
        assert_eq!(derive_status(&done), ProjectStatus::Completed);

        assert_eq!(derive_status(&DeployPlan::default()), ProjectStatus::InProgress);
    }

    #[test]
    fn test_attach_plan_moves_to_in_progress() {
        let project = create_test_project(vec![create_test_step("a", false)]);
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert!(project.plan.is_some());
    }

    #[test]
    fn test_toggle_single_step_completes_project() {
        let mut project = create_test_project(vec![create_test_step("only", false)]);

        assert!(project.toggle_step("only").unwrap());
        assert_eq!(project.status, ProjectStatus::Completed);

        assert!(!project.toggle_step("only").unwrap());
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_status_invariant_over_all_toggle_sequences() {
        let ids = ["a", "b", "c"];
        let mut project =
            create_test_project(ids.iter().map(|id| create_test_step(id, false)).collect());

        // Walk through every subset of completed steps via a Gray code.
        for i in 1..(1u32 << ids.len()) {
            let flipped = (i ^ (i >> 1)) ^ ((i - 1) ^ ((i - 1) >> 1));
            let index = flipped.trailing_zeros() as usize;
            project.toggle_step(ids[index]).unwrap();

            let plan = project.plan.as_ref().unwrap();
            let all_done = plan.steps.iter().all(|step| step.is_completed);
            assert_eq!(project.status == ProjectStatus::Completed, all_done);
        }
    }

    #[test]
    fn test_toggle_unknown_step() {
        let mut project = create_test_project(vec![create_test_step("a", false)]);
        let err = project.toggle_step("missing").unwrap_err();
        assert!(matches!(err, WizardError::StepNotFound { id } if id == "missing"));
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_toggle_without_plan() {
        let mut project = create_test_project(vec![]);
        project.plan = None;
        let err = project.toggle_step("a").unwrap_err();
        assert!(matches!(err, WizardError::NoPlan { .. }));
    }

    #[test]
    fn test_progress_percent_rounds() {
        let plan = DeployPlan {
            steps: vec![
                create_test_step("a", true),
                create_test_step("b", false),
                create_test_step("c", false),
            ],
            ..Default::default()
        };
        assert_eq!(plan.completed_count(), 1);
        assert_eq!(plan.progress_percent(), 33);
        assert_eq!(DeployPlan::default().progress_percent(), 0);
    }

    #[test]
    fn test_project_json_layout() {
        let project = create_test_project(vec![create_test_step("a", false)]);
        let json = serde_json::to_value(&project).unwrap();

        assert_eq!(json["type"], "web-app");
        assert_eq!(json["techStack"][1], "Vite");
        assert_eq!(json["hostingTarget"], "Vercel");
        assert_eq!(json["os"], "Linux");
        assert_eq!(json["createdAt"], 1_735_689_600_000_i64);
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["plan"]["steps"][0]["isCompleted"], false);
        assert_eq!(json["plan"]["steps"][0]["configFiles"][0]["fileName"], "vercel.json");
        assert!(json.get("backend").is_none());
    }

    #[test]
    fn test_project_deserializes_minimal_record() {
        let json = r#"{
            "id": "x",
            "name": "Site",
            "type": "landing-page",
            "hostingTarget": "Netlify",
            "os": "macOS",
            "createdAt": 1
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_type, ProjectType::LandingPage);
        assert_eq!(project.os, DevOs::MacOs);
        assert_eq!(project.status, ProjectStatus::Planning);
        assert!(project.tech_stack.is_empty());
        assert!(project.plan.is_none());
    }

    #[test]
    fn test_project_type_from_str() {
        assert_eq!("web-app".parse::<ProjectType>().unwrap(), ProjectType::WebApp);
        assert_eq!("API".parse::<ProjectType>().unwrap(), ProjectType::ApiService);
        assert_eq!("landing page".parse::<ProjectType>().unwrap(), ProjectType::LandingPage);
        assert!("spaceship".parse::<ProjectType>().is_err());
        for kind in ProjectType::ALL {
            assert_eq!(kind.as_str().parse::<ProjectType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dev_os_from_str() {
        assert_eq!("mac".parse::<DevOs>().unwrap(), DevOs::MacOs);
        assert_eq!("Linux".parse::<DevOs>().unwrap(), DevOs::Linux);
        assert_eq!("WINDOWS".parse::<DevOs>().unwrap(), DevOs::Windows);
        assert!("beos".parse::<DevOs>().is_err());
    }

    #[test]
    fn test_project_status_from_str() {
        assert_eq!("in_progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::Completed.as_str(), "completed");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_summary_from_project() {
        let project = create_test_project(vec![
            create_test_step("a", true),
            create_test_step("b", false),
        ]);
        let summary = ProjectSummary::from(&project);
        assert_eq!(summary.id, "project-1");
        assert_eq!(summary.total_steps, 2);
        assert_eq!(summary.completed_steps, 1);
        assert_eq!(summary.status, ProjectStatus::InProgress);
    }
}
