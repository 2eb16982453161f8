//! Hardcoded diagram content.

use super::layer::{
    Accent, Diagram, FeatureDescriptor, LayerDescriptor, LayerKey, LayerSection, MigrationColumn,
    ServiceModule, ServicesDescriptor, TechStackEntry,
};

static SERVICE_MODULES: [ServiceModule; 5] = [
    ServiceModule {
        name: "Employee Management",
        features: &["Profile Management", "Document Storage", "Org Structure"],
    },
    ServiceModule {
        name: "Payroll Processing",
        features: &["Salary Calculation", "Tax Computation", "Bulk Processing"],
    },
    ServiceModule {
        name: "Leave & Attendance",
        features: &["Leave Requests", "Attendance Tracking", "Approval Workflow"],
    },
    ServiceModule {
        name: "Reporting",
        features: &["Financial Reports", "Analytics", "Excel Export"],
    },
    ServiceModule {
        name: "Authentication",
        features: &["User Login", "MFA", "Session Management"],
    },
];

static FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        name: "Employee Management",
        description: "700+ employees across 5 companies",
    },
    FeatureDescriptor {
        name: "Payroll Processing",
        description: "Automated salary calculation with 127 components",
    },
    FeatureDescriptor {
        name: "Leave & Attendance",
        description: "Leave requests, approvals, attendance tracking",
    },
    FeatureDescriptor {
        name: "Payslips",
        description: "PDF generation & automated email delivery",
    },
    FeatureDescriptor {
        name: "Reports",
        description: "Real-time dashboards & Excel exports",
    },
    FeatureDescriptor {
        name: "Self-Service",
        description: "Employee portal for payslips & requests",
    },
];

static MIGRATION: [MigrationColumn; 3] = [
    MigrationColumn {
        heading: "Current State",
        bullets: &[
            "127 columns of formulas",
            "Manual calculations",
            "16 interconnected sheets",
            "Risk of errors",
        ],
    },
    MigrationColumn {
        heading: "Migration Process",
        bullets: &[
            "Extract & clean data",
            "Map to database tables",
            "Automated scripts",
            "Parallel running (1-2 months)",
        ],
    },
    MigrationColumn {
        heading: "Future State",
        bullets: &[
            "Automated calculations",
            "Real-time reports",
            "Mobile access",
            "Audit trails",
        ],
    },
];

static TECH_STACK: [TechStackEntry; 4] = [
    TechStackEntry {
        category: "Frontend",
        accent: Accent::Blue,
        labels: &["React.js + TypeScript", "Material-UI"],
    },
    TechStackEntry {
        category: "Backend",
        accent: Accent::Green,
        labels: &["Node.js + Express", "JWT Auth"],
    },
    TechStackEntry {
        category: "Database",
        accent: Accent::Orange,
        labels: &["PostgreSQL", "Redis Cache"],
    },
    TechStackEntry {
        category: "Infrastructure",
        accent: Accent::Purple,
        labels: &["AWS / Azure", "Docker"],
    },
];

static NEXT_STEPS: [&str; 5] = [
    "Review the architecture and database schema documents",
    "Decide on technology stack based on your team's expertise",
    "Set up development environment and database",
    "Create data migration scripts from Excel",
    "Build MVP (Employee Management + Basic Payroll)",
];

static SECTIONS: [LayerSection; 4] = [
    LayerSection::Layer(LayerDescriptor {
        key: LayerKey::Presentation,
        title: "Presentation Layer",
        accent: Accent::Blue,
        items: &[
            "React.js Frontend (Web App)",
            "Responsive Design (Mobile/Tablet/Desktop)",
            "Material-UI Components",
            "Real-time Updates",
            "Multi-language Support (EN/AR)",
        ],
    }),
    LayerSection::Layer(LayerDescriptor {
        key: LayerKey::Application,
        title: "Application Layer",
        accent: Accent::Green,
        items: &[
            "RESTful API Gateway",
            "Node.js/Express Backend",
            "JWT Authentication",
            "Role-Based Access Control (RBAC)",
            "Business Logic Services",
        ],
    }),
    LayerSection::Services(ServicesDescriptor {
        title: "Microservices",
        accent: Accent::Purple,
        modules: &SERVICE_MODULES,
    }),
    LayerSection::Layer(LayerDescriptor {
        key: LayerKey::Data,
        title: "Data Layer",
        accent: Accent::Orange,
        items: &[
            "PostgreSQL (Primary Database)",
            "Redis (Cache & Sessions)",
            "AWS S3 (Document Storage)",
            "Backup & Recovery System",
        ],
    }),
];

static DIAGRAM: Diagram = Diagram {
    title: "HR & Payroll System Architecture",
    subtitle: "Web-based solution for 500+ employees across multiple companies",
    sections: &SECTIONS,
    features: &FEATURES,
    migration_title: "From Excel to Modern System",
    migration: &MIGRATION,
    tech_stack: &TECH_STACK,
    next_steps: &NEXT_STEPS,
};

/// The diagram shown by the application.
pub fn diagram() -> &'static Diagram {
    &DIAGRAM
}
