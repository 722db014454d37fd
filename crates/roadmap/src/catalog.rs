//! The learning-curriculum roadmap: labels, modules and their sub-tasks.
//!
//! Pure data. Order matters: labels are created in declaration order, then
//! modules in ascending number, each followed by its sub-tasks.

use crate::registry::RegistryKey;

/// Sub-issues created under each module issue
pub const SUB_TASKS_PER_MODULE: usize = 5;

/// Progress units per module: the module issue plus its sub-tasks
pub const STEPS_PER_MODULE: u64 = 1 + SUB_TASKS_PER_MODULE as u64;

/// Team label applied to module and sub-task issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: &'static str,
    /// Hex color code
    pub color: &'static str,
    pub description: &'static str,
}

/// Child issue of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubTaskSpec {
    pub title: &'static str,
    pub description: &'static str,
    /// Label name, resolved through the registry at creation time
    pub label: &'static str,
}

/// Top-level curriculum issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSpec {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub label: &'static str,
    /// Linear priority (1 = urgent, 2 = high)
    pub priority: i32,
    pub sub_tasks: &'static [SubTaskSpec],
}

impl ModuleSpec {
    /// Issue title as created in Linear, e.g. "Module 3: Database Design and SQL".
    #[must_use]
    pub fn issue_title(&self) -> String {
        format!("Module {}: {}", self.number, self.title)
    }

    /// Registry key for this module's remote id.
    #[must_use]
    pub fn key(&self) -> RegistryKey {
        RegistryKey::Module(self.number)
    }
}

/// Ordered catalog handed to the orchestrator.
#[derive(Debug, Clone, Copy)]
pub struct Roadmap {
    pub labels: &'static [LabelSpec],
    pub modules: &'static [ModuleSpec],
}

impl Roadmap {
    #[must_use]
    pub const fn new(labels: &'static [LabelSpec], modules: &'static [ModuleSpec]) -> Self {
        Self { labels, modules }
    }

    /// The Python data-engineering curriculum.
    #[must_use]
    pub fn python_curriculum() -> Self {
        Self::new(&LABELS, &MODULES)
    }

    /// Total number of sub-tasks across all modules.
    #[must_use]
    pub fn sub_task_count(&self) -> usize {
        self.modules.iter().map(|m| m.sub_tasks.len()).sum()
    }

    /// Look up a module by number.
    #[must_use]
    pub fn module(&self, number: u32) -> Option<&'static ModuleSpec> {
        self.modules.iter().find(|m| m.number == number)
    }
}

pub static LABELS: [LabelSpec; 10] = [
    LabelSpec {
        name: "Python Fundamentals",
        color: "#ef4444",
        description: "Basic Python concepts and syntax",
    },
    LabelSpec {
        name: "Python Advanced",
        color: "#f97316",
        description: "Advanced Python features and patterns",
    },
    LabelSpec {
        name: "Database Design",
        color: "#3b82f6",
        description: "Database concepts and SQL",
    },
    LabelSpec {
        name: "SQLAlchemy Fundamentals",
        color: "#22c55e",
        description: "Basic SQLAlchemy ORM usage",
    },
    LabelSpec {
        name: "SQLAlchemy Advanced",
        color: "#14b8a6",
        description: "Advanced SQLAlchemy features",
    },
    LabelSpec {
        name: "API Development",
        color: "#eab308",
        description: "Building APIs with FastAPI",
    },
    LabelSpec {
        name: "Interactive Tools",
        color: "#a855f7",
        description: "Interactive data exploration tools",
    },
    LabelSpec {
        name: "Performance",
        color: "#6b7280",
        description: "Performance optimization and tuning",
    },
    LabelSpec {
        name: "Data Analysis",
        color: "#ec4899",
        description: "Data analysis with Pandas",
    },
    LabelSpec {
        name: "Complete Project",
        color: "#f59e0b",
        description: "End-to-end project development",
    },
];

pub static MODULES: [ModuleSpec; 10] = [
    ModuleSpec {
        number: 1,
        title: "Python Fundamentals",
        description: "**Learning Objectives:**\n\
                     - Master Python syntax and basic data types\n\
                     - Understand control structures and functions\n\
                     - Learn object-oriented programming basics\n\
                     - Practice file I/O and error handling\n\
                     \n\
                     **Topics Covered:**\n\
                     - Variables, data types, and operators\n\
                     - Control structures (if/else, loops)\n\
                     - Functions and scope\n\
                     - Classes and objects\n\
                     - File operations and exception handling\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Complete all exercises and build a simple calculator application\n\
                     \n\
                     **Notebook:** `modules/module_1_python_fundamentals/python_fundamentals.ipynb`",
        label: "Python Fundamentals",
        priority: 1,
        sub_tasks: &MODULE_1_TASKS,
    },
    ModuleSpec {
        number: 2,
        title: "Python Advanced Features",
        description: "**Learning Objectives:**\n\
                     - Master advanced Python features and patterns\n\
                     - Understand functional programming concepts\n\
                     - Learn performance optimization techniques\n\
                     - Practice with advanced data structures\n\
                     \n\
                     **Topics Covered:**\n\
                     - Decorators and context managers\n\
                     - Generators and iterators\n\
                     - Lambda functions and comprehensions\n\
                     - Advanced data structures\n\
                     - Performance profiling and optimization\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Build a decorator-based caching system and optimize a data processing script\n\
                     \n\
                     **Notebook:** `modules/module_2_python_advanced/python_advanced.ipynb`",
        label: "Python Advanced",
        priority: 1,
        sub_tasks: &MODULE_2_TASKS,
    },
    ModuleSpec {
        number: 3,
        title: "Database Design and SQL",
        description: "**Learning Objectives:**\n\
                     - Master database design principles\n\
                     - Learn SQL fundamentals and advanced queries\n\
                     - Understand indexing and performance optimization\n\
                     - Practice database normalization\n\
                     \n\
                     **Topics Covered:**\n\
                     - Database design principles and ER modeling\n\
                     - SQL DDL, DML, and DCL\n\
                     - Advanced SQL queries (joins, subqueries, window functions)\n\
                     - Database indexing and optimization\n\
                     - Normalization and denormalization\n\
                     \n\
                     **Time Estimate:** 3-4 weeks\n\
                     **Success Criteria:** Design a normalized database schema and write complex SQL queries\n\
                     \n\
                     **Notebook:** `modules/module_3_database_design/database_design.ipynb`",
        label: "Database Design",
        priority: 1,
        sub_tasks: &MODULE_3_TASKS,
    },
    ModuleSpec {
        number: 4,
        title: "SQLAlchemy ORM Fundamentals",
        description: "**Learning Objectives:**\n\
                     - Master SQLAlchemy ORM concepts and setup\n\
                     - Learn model definition and relationships\n\
                     - Practice basic CRUD operations\n\
                     - Understand database migrations\n\
                     \n\
                     **Topics Covered:**\n\
                     - SQLAlchemy setup and configuration\n\
                     - Model definition and relationships\n\
                     - Basic CRUD operations\n\
                     - Database migrations with Alembic\n\
                     - Query building and filtering\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Build a complete CRUD application with SQLAlchemy\n\
                     \n\
                     **Notebook:** `modules/module_4_sqlalchemy_fundamentals/sqlalchemy_fundamentals.ipynb`",
        label: "SQLAlchemy Fundamentals",
        priority: 1,
        sub_tasks: &MODULE_4_TASKS,
    },
    ModuleSpec {
        number: 5,
        title: "SQLAlchemy Advanced Features",
        description: "**Learning Objectives:**\n\
                     - Master advanced SQLAlchemy features\n\
                     - Learn complex query patterns and joins\n\
                     - Understand custom SQL and raw queries\n\
                     - Practice database sessions and transactions\n\
                     \n\
                     **Topics Covered:**\n\
                     - Advanced queries and joins\n\
                     - Custom SQL and raw queries\n\
                     - Database sessions and transactions\n\
                     - Performance optimization\n\
                     - Advanced relationship patterns\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Build a complex reporting system with advanced queries\n\
                     \n\
                     **Notebook:** `modules/module_5_sqlalchemy_advanced/sqlalchemy_advanced.ipynb`",
        label: "SQLAlchemy Advanced",
        priority: 1,
        sub_tasks: &MODULE_5_TASKS,
    },
    ModuleSpec {
        number: 6,
        title: "Building Data APIs with FastAPI",
        description: "**Learning Objectives:**\n\
                     - Master FastAPI fundamentals\n\
                     - Learn API design and documentation\n\
                     - Practice data validation with Pydantic\n\
                     - Understand authentication and security\n\
                     \n\
                     **Topics Covered:**\n\
                     - FastAPI setup and routing\n\
                     - API design and documentation\n\
                     - Data validation with Pydantic\n\
                     - Authentication and security\n\
                     - Database integration with FastAPI\n\
                     \n\
                     **Time Estimate:** 3-4 weeks\n\
                     **Success Criteria:** Build a complete REST API with authentication and documentation\n\
                     \n\
                     **Notebook:** `modules/module_6_fastapi_apis/fastapi_apis.ipynb`",
        label: "API Development",
        priority: 1,
        sub_tasks: &MODULE_6_TASKS,
    },
    ModuleSpec {
        number: 7,
        title: "Interactive Data Console",
        description: "**Learning Objectives:**\n\
                     - Build a Rails console-like interface\n\
                     - Create interactive data exploration tools\n\
                     - Implement REPL for data manipulation\n\
                     - Practice real-time data analysis\n\
                     \n\
                     **Topics Covered:**\n\
                     - Interactive Python shells and REPLs\n\
                     - Data exploration interfaces\n\
                     - Real-time data analysis\n\
                     - Custom command-line tools\n\
                     - Database query interfaces\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Build a fully functional data exploration console\n\
                     \n\
                     **Notebook:** `modules/module_7_interactive_console/interactive_console.ipynb`",
        label: "Interactive Tools",
        priority: 2,
        sub_tasks: &MODULE_7_TASKS,
    },
    ModuleSpec {
        number: 8,
        title: "Database Performance and Optimization",
        description: "**Learning Objectives:**\n\
                     - Master query optimization techniques\n\
                     - Learn database indexing strategies\n\
                     - Understand caching and connection pooling\n\
                     - Practice monitoring and profiling\n\
                     \n\
                     **Topics Covered:**\n\
                     - Query optimization and execution plans\n\
                     - Database indexing strategies\n\
                     - Caching and connection pooling\n\
                     - Monitoring and profiling\n\
                     - Performance tuning best practices\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Optimize a slow application and implement monitoring\n\
                     \n\
                     **Notebook:** `modules/module_8_performance_optimization/performance_optimization.ipynb`",
        label: "Performance",
        priority: 2,
        sub_tasks: &MODULE_8_TASKS,
    },
    ModuleSpec {
        number: 9,
        title: "Data Analysis with Pandas",
        description: "**Learning Objectives:**\n\
                     - Master data manipulation and analysis with Pandas\n\
                     - Learn data cleaning and preprocessing\n\
                     - Practice statistical analysis\n\
                     - Understand data export and import\n\
                     \n\
                     **Topics Covered:**\n\
                     - Pandas data structures (DataFrame, Series)\n\
                     - Data manipulation and transformation\n\
                     - Data cleaning and preprocessing\n\
                     - Statistical analysis and aggregation\n\
                     - Data visualization with Pandas\n\
                     \n\
                     **Time Estimate:** 2-3 weeks\n\
                     **Success Criteria:** Complete a comprehensive data analysis project\n\
                     \n\
                     **Notebook:** `modules/module_9_data_analysis/data_analysis.ipynb`",
        label: "Data Analysis",
        priority: 2,
        sub_tasks: &MODULE_9_TASKS,
    },
    ModuleSpec {
        number: 10,
        title: "Complete Data Application Project",
        description: "**Learning Objectives:**\n\
                     - Build an end-to-end data application\n\
                     - Integrate all learned concepts\n\
                     - Practice deployment and monitoring\n\
                     - Create a portfolio-worthy project\n\
                     \n\
                     **Topics Covered:**\n\
                     - Project planning and architecture\n\
                     - Data pipeline implementation\n\
                     - API development and testing\n\
                     - Frontend integration\n\
                     - Deployment and monitoring\n\
                     \n\
                     **Time Estimate:** 4-6 weeks\n\
                     **Success Criteria:** Deploy a complete data application to production\n\
                     \n\
                     **Notebook:** `modules/module_10_complete_project/complete_project.ipynb`",
        label: "Complete Project",
        priority: 1,
        sub_tasks: &MODULE_10_TASKS,
    },
];

const MODULE_1_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Variables and Data Types",
        description: "**Exercise:** Create variables of different types and practice type conversion.\n\
                     **Expected Outcome:** Understand Python's dynamic typing system.\n\
                     **Notebook Section:** Variables and Data Types",
        label: "Python Fundamentals",
    },
    SubTaskSpec {
        title: "Control Structures",
        description: "**Exercise:** Build a number guessing game using if/else and loops.\n\
                     **Expected Outcome:** Master conditional logic and iteration.\n\
                     **Notebook Section:** Control Structures",
        label: "Python Fundamentals",
    },
    SubTaskSpec {
        title: "Functions and Scope",
        description: "**Exercise:** Create a function library for mathematical operations.\n\
                     **Expected Outcome:** Understand function definition and variable scope.\n\
                     **Notebook Section:** Functions and Scope",
        label: "Python Fundamentals",
    },
    SubTaskSpec {
        title: "Classes and Objects",
        description: "**Exercise:** Build a simple bank account class with methods.\n\
                     **Expected Outcome:** Master basic OOP concepts.\n\
                     **Notebook Section:** Classes and Objects",
        label: "Python Fundamentals",
    },
    SubTaskSpec {
        title: "File I/O and Error Handling",
        description: "**Exercise:** Create a file processor with error handling.\n\
                     **Expected Outcome:** Handle file operations and exceptions gracefully.\n\
                     **Notebook Section:** File I/O and Error Handling",
        label: "Python Fundamentals",
    },
];

const MODULE_2_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Decorators and Context Managers",
        description: "**Exercise:** Create a timing decorator and a database connection context manager.\n\
                     **Expected Outcome:** Master decorator patterns and resource management.\n\
                     **Notebook Section:** Decorators and Context Managers",
        label: "Python Advanced",
    },
    SubTaskSpec {
        title: "Generators and Iterators",
        description: "**Exercise:** Build a Fibonacci generator and custom iterator class.\n\
                     **Expected Outcome:** Understand memory-efficient iteration patterns.\n\
                     **Notebook Section:** Generators and Iterators",
        label: "Python Advanced",
    },
    SubTaskSpec {
        title: "Functional Programming",
        description: "**Exercise:** Process a dataset using map, filter, and reduce operations.\n\
                     **Expected Outcome:** Master functional programming paradigms.\n\
                     **Notebook Section:** Functional Programming",
        label: "Python Advanced",
    },
    SubTaskSpec {
        title: "Advanced Data Structures",
        description: "**Exercise:** Implement a custom data structure using collections module.\n\
                     **Expected Outcome:** Work with advanced Python data structures.\n\
                     **Notebook Section:** Advanced Data Structures",
        label: "Python Advanced",
    },
    SubTaskSpec {
        title: "Performance Optimization",
        description: "**Exercise:** Profile and optimize a slow data processing function.\n\
                     **Expected Outcome:** Learn performance analysis and optimization techniques.\n\
                     **Notebook Section:** Performance Optimization",
        label: "Python Advanced",
    },
];

const MODULE_3_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Database Design Principles",
        description: "**Exercise:** Design an ER diagram for an e-commerce system.\n\
                     **Expected Outcome:** Master entity-relationship modeling.\n\
                     **Notebook Section:** Database Design Principles",
        label: "Database Design",
    },
    SubTaskSpec {
        title: "SQL Fundamentals",
        description: "**Exercise:** Create tables, insert data, and write basic SELECT queries.\n\
                     **Expected Outcome:** Master basic SQL operations.\n\
                     **Notebook Section:** SQL Fundamentals",
        label: "Database Design",
    },
    SubTaskSpec {
        title: "Advanced SQL Queries",
        description: "**Exercise:** Write complex queries with joins, subqueries, and window functions.\n\
                     **Expected Outcome:** Handle complex data retrieval scenarios.\n\
                     **Notebook Section:** Advanced SQL Queries",
        label: "Database Design",
    },
    SubTaskSpec {
        title: "Database Indexing",
        description: "**Exercise:** Analyze query performance and create appropriate indexes.\n\
                     **Expected Outcome:** Optimize database performance through indexing.\n\
                     **Notebook Section:** Database Indexing",
        label: "Database Design",
    },
    SubTaskSpec {
        title: "Database Normalization",
        description: "**Exercise:** Normalize a denormalized database to 3NF.\n\
                     **Expected Outcome:** Apply normalization principles to reduce redundancy.\n\
                     **Notebook Section:** Database Normalization",
        label: "Database Design",
    },
];

const MODULE_4_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "SQLAlchemy Setup and Configuration",
        description: "**Exercise:** Set up SQLAlchemy with SQLite and PostgreSQL.\n\
                     **Expected Outcome:** Configure database connections and engines.\n\
                     **Notebook Section:** SQLAlchemy Setup",
        label: "SQLAlchemy Fundamentals",
    },
    SubTaskSpec {
        title: "Model Definition and Relationships",
        description: "**Exercise:** Create models for a blog system with user-post relationships.\n\
                     **Expected Outcome:** Master model definition and relationship mapping.\n\
                     **Notebook Section:** Models and Relationships",
        label: "SQLAlchemy Fundamentals",
    },
    SubTaskSpec {
        title: "Basic CRUD Operations",
        description: "**Exercise:** Implement full CRUD operations for a product catalog.\n\
                     **Expected Outcome:** Master create, read, update, and delete operations.\n\
                     **Notebook Section:** CRUD Operations",
        label: "SQLAlchemy Fundamentals",
    },
    SubTaskSpec {
        title: "Database Migrations",
        description: "**Exercise:** Use Alembic to create and manage database migrations.\n\
                     **Expected Outcome:** Handle database schema changes safely.\n\
                     **Notebook Section:** Database Migrations",
        label: "SQLAlchemy Fundamentals",
    },
    SubTaskSpec {
        title: "Query Building and Filtering",
        description: "**Exercise:** Build complex queries with filtering, sorting, and pagination.\n\
                     **Expected Outcome:** Master SQLAlchemy query building.\n\
                     **Notebook Section:** Query Building",
        label: "SQLAlchemy Fundamentals",
    },
];

const MODULE_5_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Advanced Queries and Joins",
        description: "**Exercise:** Build complex queries with multiple joins and aggregations.\n\
                     **Expected Outcome:** Master advanced query patterns.\n\
                     **Notebook Section:** Advanced Queries",
        label: "SQLAlchemy Advanced",
    },
    SubTaskSpec {
        title: "Custom SQL and Raw Queries",
        description: "**Exercise:** Execute raw SQL queries and integrate with ORM.\n\
                     **Expected Outcome:** Combine ORM with custom SQL when needed.\n\
                     **Notebook Section:** Custom SQL",
        label: "SQLAlchemy Advanced",
    },
    SubTaskSpec {
        title: "Database Sessions and Transactions",
        description: "**Exercise:** Implement transaction management and session handling.\n\
                     **Expected Outcome:** Master database transaction patterns.\n\
                     **Notebook Section:** Sessions and Transactions",
        label: "SQLAlchemy Advanced",
    },
    SubTaskSpec {
        title: "Performance Optimization",
        description: "**Exercise:** Optimize slow queries and implement caching strategies.\n\
                     **Expected Outcome:** Improve application performance.\n\
                     **Notebook Section:** Performance Optimization",
        label: "SQLAlchemy Advanced",
    },
    SubTaskSpec {
        title: "Advanced Relationship Patterns",
        description: "**Exercise:** Implement many-to-many, polymorphic, and self-referential relationships.\n\
                     **Expected Outcome:** Master complex relationship patterns.\n\
                     **Notebook Section:** Advanced Relationships",
        label: "SQLAlchemy Advanced",
    },
];

const MODULE_6_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "FastAPI Setup and Routing",
        description: "**Exercise:** Create a FastAPI application with multiple routes and endpoints.\n\
                     **Expected Outcome:** Master FastAPI application structure and routing.\n\
                     **Notebook Section:** FastAPI Setup",
        label: "API Development",
    },
    SubTaskSpec {
        title: "API Design and Documentation",
        description: "**Exercise:** Design RESTful APIs with proper HTTP methods and status codes.\n\
                     **Expected Outcome:** Create well-documented APIs with OpenAPI/Swagger.\n\
                     **Notebook Section:** API Design",
        label: "API Development",
    },
    SubTaskSpec {
        title: "Data Validation with Pydantic",
        description: "**Exercise:** Implement request/response models with validation.\n\
                     **Expected Outcome:** Master data validation and serialization.\n\
                     **Notebook Section:** Data Validation",
        label: "API Development",
    },
    SubTaskSpec {
        title: "Authentication and Security",
        description: "**Exercise:** Implement JWT authentication and security middleware.\n\
                     **Expected Outcome:** Secure APIs with proper authentication.\n\
                     **Notebook Section:** Authentication",
        label: "API Development",
    },
    SubTaskSpec {
        title: "Database Integration",
        description: "**Exercise:** Integrate FastAPI with SQLAlchemy for data persistence.\n\
                     **Expected Outcome:** Build data-driven APIs with database integration.\n\
                     **Notebook Section:** Database Integration",
        label: "API Development",
    },
];

const MODULE_7_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Interactive Python Shells",
        description: "**Exercise:** Create custom IPython extensions and magic commands.\n\
                     **Expected Outcome:** Master interactive Python environments.\n\
                     **Notebook Section:** Interactive Shells",
        label: "Interactive Tools",
    },
    SubTaskSpec {
        title: "Data Exploration Interface",
        description: "**Exercise:** Build a web-based data exploration dashboard.\n\
                     **Expected Outcome:** Create intuitive data exploration tools.\n\
                     **Notebook Section:** Data Exploration",
        label: "Interactive Tools",
    },
    SubTaskSpec {
        title: "Real-time Data Analysis",
        description: "**Exercise:** Implement streaming data analysis with live updates.\n\
                     **Expected Outcome:** Handle real-time data processing.\n\
                     **Notebook Section:** Real-time Analysis",
        label: "Interactive Tools",
    },
    SubTaskSpec {
        title: "Custom Command-line Tools",
        description: "**Exercise:** Build CLI tools for database management and data processing.\n\
                     **Expected Outcome:** Create powerful command-line interfaces.\n\
                     **Notebook Section:** CLI Tools",
        label: "Interactive Tools",
    },
    SubTaskSpec {
        title: "Database Query Interface",
        description: "**Exercise:** Create an interactive SQL query interface with autocomplete.\n\
                     **Expected Outcome:** Build user-friendly database query tools.\n\
                     **Notebook Section:** Query Interface",
        label: "Interactive Tools",
    },
];

const MODULE_8_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Query Optimization",
        description: "**Exercise:** Analyze and optimize slow SQL queries using execution plans.\n\
                     **Expected Outcome:** Master query optimization techniques.\n\
                     **Notebook Section:** Query Optimization",
        label: "Performance",
    },
    SubTaskSpec {
        title: "Database Indexing Strategies",
        description: "**Exercise:** Design and implement effective indexing strategies.\n\
                     **Expected Outcome:** Optimize database performance through indexing.\n\
                     **Notebook Section:** Indexing Strategies",
        label: "Performance",
    },
    SubTaskSpec {
        title: "Caching and Connection Pooling",
        description: "**Exercise:** Implement Redis caching and database connection pooling.\n\
                     **Expected Outcome:** Improve application performance through caching.\n\
                     **Notebook Section:** Caching and Pooling",
        label: "Performance",
    },
    SubTaskSpec {
        title: "Monitoring and Profiling",
        description: "**Exercise:** Set up application monitoring and performance profiling.\n\
                     **Expected Outcome:** Monitor application performance in production.\n\
                     **Notebook Section:** Monitoring",
        label: "Performance",
    },
    SubTaskSpec {
        title: "Performance Tuning Best Practices",
        description: "**Exercise:** Apply performance tuning best practices to a real application.\n\
                     **Expected Outcome:** Master performance optimization methodologies.\n\
                     **Notebook Section:** Best Practices",
        label: "Performance",
    },
];

const MODULE_9_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Pandas Data Structures",
        description: "**Exercise:** Work with DataFrames and Series, practice data selection and indexing.\n\
                     **Expected Outcome:** Master Pandas data structures and operations.\n\
                     **Notebook Section:** Data Structures",
        label: "Data Analysis",
    },
    SubTaskSpec {
        title: "Data Manipulation and Transformation",
        description: "**Exercise:** Transform and reshape data using groupby, pivot, and merge operations.\n\
                     **Expected Outcome:** Master data transformation techniques.\n\
                     **Notebook Section:** Data Manipulation",
        label: "Data Analysis",
    },
    SubTaskSpec {
        title: "Data Cleaning and Preprocessing",
        description: "**Exercise:** Clean messy data, handle missing values, and detect outliers.\n\
                     **Expected Outcome:** Prepare data for analysis.\n\
                     **Notebook Section:** Data Cleaning",
        label: "Data Analysis",
    },
    SubTaskSpec {
        title: "Statistical Analysis",
        description: "**Exercise:** Perform statistical analysis and create summary reports.\n\
                     **Expected Outcome:** Extract insights from data.\n\
                     **Notebook Section:** Statistical Analysis",
        label: "Data Analysis",
    },
    SubTaskSpec {
        title: "Data Visualization",
        description: "**Exercise:** Create charts and visualizations using Pandas plotting capabilities.\n\
                     **Expected Outcome:** Visualize data effectively.\n\
                     **Notebook Section:** Data Visualization",
        label: "Data Analysis",
    },
];

const MODULE_10_TASKS: [SubTaskSpec; 5] = [
    SubTaskSpec {
        title: "Project Planning and Architecture",
        description: "**Exercise:** Design the architecture for a data-driven e-commerce analytics platform.\n\
                     **Expected Outcome:** Create a comprehensive project plan and architecture.\n\
                     **Notebook Section:** Project Planning",
        label: "Complete Project",
    },
    SubTaskSpec {
        title: "Data Pipeline Implementation",
        description: "**Exercise:** Build ETL pipelines for processing e-commerce data.\n\
                     **Expected Outcome:** Implement robust data processing pipelines.\n\
                     **Notebook Section:** Data Pipeline",
        label: "Complete Project",
    },
    SubTaskSpec {
        title: "API Development and Testing",
        description: "**Exercise:** Create REST APIs for data access and implement comprehensive testing.\n\
                     **Expected Outcome:** Build and test production-ready APIs.\n\
                     **Notebook Section:** API Development",
        label: "Complete Project",
    },
    SubTaskSpec {
        title: "Frontend Integration",
        description: "**Exercise:** Build a dashboard for data visualization and interaction.\n\
                     **Expected Outcome:** Create an intuitive user interface.\n\
                     **Notebook Section:** Frontend Integration",
        label: "Complete Project",
    },
    SubTaskSpec {
        title: "Deployment and Monitoring",
        description: "**Exercise:** Deploy the application and implement monitoring and logging.\n\
                     **Expected Outcome:** Successfully deploy and monitor a production application.\n\
                     **Notebook Section:** Deployment",
        label: "Complete Project",
    },
];
