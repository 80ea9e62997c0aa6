//! Builders for the individual CMake commands `cmm` emits.
//!
//! Every builder returns finished text. Paths are always rendered with `/`.
//! Builders returning `Option` produce nothing when the setting is off.

use crate::domain::model::CxxStandard;
use crate::utils::paths::to_cmake_path;
use std::path::Path;

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

pub fn cmake_minimum_required(version: &str) -> String {
    format!("cmake_minimum_required(VERSION {})", version)
}

pub fn project(name: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("project({} VERSION {} LANGUAGES CXX)", quoted(name), version),
        None => format!("project({} LANGUAGES CXX)", quoted(name)),
    }
}

pub fn link_libraries(lib: &str) -> Option<String> {
    if lib.is_empty() {
        return None;
    }
    Some(format!("link_libraries({})", quoted(lib)))
}

pub fn include_directories(dir: &Path) -> String {
    format!("include_directories({})", to_cmake_path(dir))
}

pub fn link_directories(dir: &Path) -> String {
    format!("link_directories({})", to_cmake_path(dir))
}

pub fn target_compile_definitions(name: &str, definition: &str) -> String {
    format!(
        "target_compile_definitions({} PRIVATE {})",
        quoted(name),
        definition
    )
}

pub fn add_library(name: &str, file_list_var: &str, shared: bool) -> String {
    if shared {
        format!("add_library({} SHARED ${{{}}})", quoted(name), file_list_var)
    } else {
        format!("add_library({} ${{{}}})", quoted(name), file_list_var)
    }
}

pub fn add_executable(name: &str, file_list_var: &str) -> String {
    format!("add_executable({} ${{{}}})", quoted(name), file_list_var)
}

pub fn source_group(filter: &str, file_path: &Path) -> String {
    format!(
        "source_group({} FILES {})",
        quoted(&filter.replace('\\', "/")),
        to_cmake_path(file_path)
    )
}

pub fn find_package_qt(package: &str) -> Vec<String> {
    vec![
        format!("find_package(QT NAMES Qt6 Qt5 COMPONENTS {} REQUIRED)", package),
        format!(
            "find_package(Qt${{QT_VERSION_MAJOR}} COMPONENTS {} REQUIRED)",
            package
        ),
    ]
}

pub fn target_link_libraries_qt(name: &str, package: &str) -> String {
    format!(
        "target_link_libraries({} PRIVATE Qt${{QT_VERSION_MAJOR}}::{})",
        quoted(name),
        package
    )
}

pub fn add_subdirectory(subdir: &str) -> String {
    format!("add_subdirectory({})", quoted(subdir))
}

fn switch_on(variable: &str, value: bool) -> Option<String> {
    value.then(|| format!("set({} ON)", variable))
}

pub fn cmake_include_current_dir(value: bool) -> Option<String> {
    switch_on("CMAKE_INCLUDE_CURRENT_DIR", value)
}

pub fn cmake_autouic(value: bool) -> Option<String> {
    switch_on("CMAKE_AUTOUIC", value)
}

pub fn cmake_automoc(value: bool) -> Option<String> {
    switch_on("CMAKE_AUTOMOC", value)
}

pub fn cmake_autorcc(value: bool) -> Option<String> {
    switch_on("CMAKE_AUTORCC", value)
}

pub fn cmake_cxx_standard(value: CxxStandard) -> String {
    format!("set(CMAKE_CXX_STANDARD {})", value.as_str())
}

pub fn cmake_cxx_standard_required(value: bool) -> Option<String> {
    switch_on("CMAKE_CXX_STANDARD_REQUIRED", value)
}

pub fn cmake_output_directory(output_dir: &str) -> Vec<String> {
    let output_dir = output_dir.replace('\\', "/");
    ["ARCHIVE", "LIBRARY", "RUNTIME"]
        .iter()
        .map(|kind| {
            format!(
                "set(CMAKE_{}_OUTPUT_DIRECTORY ${{CMAKE_SOURCE_DIR}}/{})",
                kind, output_dir
            )
        })
        .collect()
}

/// GUI subsystem with a regular `main` entry point (MSVC).
pub fn cmake_exe_linker_flags() -> String {
    "set(CMAKE_EXE_LINKER_FLAGS \"${CMAKE_EXE_LINKER_FLAGS} /SUBSYSTEM:WINDOWS /ENTRY:mainCRTStartup\")"
        .to_string()
}

pub fn set_variable_multi_paths(var_name: &str, paths: &[std::path::PathBuf]) -> Vec<String> {
    let mut lines = Vec::with_capacity(paths.len() + 2);
    lines.push(format!("set({}", var_name));
    lines.extend(paths.iter().map(|p| to_cmake_path(p)));
    lines.push(")".to_string());
    lines
}

pub fn set_cmake_cxx_flags(flags: &[String]) -> String {
    format!("set(CMAKE_CXX_FLAGS \"${{CMAKE_CXX_FLAGS}} {}\")", flags.join(" "))
}

pub fn startup_project(project_name: &str) -> String {
    format!(
        "set_property(DIRECTORY PROPERTY VS_STARTUP_PROJECT {})",
        quoted(project_name)
    )
}

pub fn debugger_working_directory(project_name: &str, dir: &str) -> String {
    format!(
        "set_property(TARGET {} PROPERTY VS_DEBUGGER_WORKING_DIRECTORY ${{CMAKE_SOURCE_DIR}}/{}/${{CMAKE_CFG_INTDIR}})",
        quoted(project_name),
        dir.replace('\\', "/")
    )
}

pub fn add_dependencies(depending: &str, depended: &str) -> String {
    format!("add_dependencies({} {})", quoted(depending), quoted(depended))
}
