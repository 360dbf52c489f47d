//! HTML pages
//!
//! Pages are assembled into a `String`; every interpolated value goes
//! through [`escape_html`].

use crate::models::Employee;

/// Shown for edit/delete requests that address an id with no row
pub const EMPLOYEE_NOT_FOUND: &str = "Sorry, the employee does not exist.";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}\
td,th{border:1px solid #ccc;padding:.3rem .6rem}\
form.inline{display:inline}\
.message{padding:.6rem;background:#fff4d6;border:1px solid #e0c060}";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape_html(title));
    out.push_str("</title>\n<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}

/// Text input row; `value` is `None` for the blank add form.
fn input(out: &mut String, label: &str, name: &str, kind: &str, value: Option<&str>) {
    out.push_str("<p><label>");
    out.push_str(label);
    out.push_str(" <input type=\"");
    out.push_str(kind);
    out.push_str("\" name=\"");
    out.push_str(name);
    out.push('"');
    if let Some(v) = value {
        out.push_str(" value=\"");
        out.push_str(&escape_html(v));
        out.push('"');
    }
    out.push_str(" required></label></p>\n");
}

fn employee_inputs(out: &mut String, employee: Option<&Employee>) {
    let phone = employee.map(|e| e.phone.to_string());
    let salary = employee.map(|e| e.salary.to_string());

    input(out, "Name", "name", "text", employee.map(|e| e.name.as_str()));
    input(out, "Gender", "gender", "text", employee.map(|e| e.gender.as_str()));
    input(out, "Address", "address", "text", employee.map(|e| e.address.as_str()));
    input(out, "Phone", "phone", "number", phone.as_deref());
    input(out, "Salary", "salary", "number", salary.as_deref());
    input(
        out,
        "Department",
        "department",
        "text",
        employee.map(|e| e.department.as_str()),
    );
}

/// Employee list with per-row edit/delete actions and the add form.
pub fn index(employees: &[Employee]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Employees</h1>\n<table>\n");
    body.push_str(
        "<tr><th>ID</th><th>Name</th><th>Gender</th><th>Address</th>\
         <th>Phone</th><th>Salary</th><th>Department</th><th></th></tr>\n",
    );

    if employees.is_empty() {
        body.push_str("<tr><td colspan=\"8\">No employees yet.</td></tr>\n");
    }

    for e in employees {
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{gender}</td><td>{address}</td>\
             <td>{phone}</td><td>{salary}</td><td>{department}</td>\
             <td><a href=\"/edit/{id}\">Edit</a> \
             <form class=\"inline\" method=\"post\" action=\"/delete\">\
             <input type=\"hidden\" name=\"emp_id\" value=\"{id}\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            id = e.id,
            name = escape_html(&e.name),
            gender = escape_html(&e.gender),
            address = escape_html(&e.address),
            phone = e.phone,
            salary = e.salary,
            department = escape_html(&e.department),
        ));
    }
    body.push_str("</table>\n");

    body.push_str("<h2>Add employee</h2>\n<form method=\"post\" action=\"/add\">\n");
    employee_inputs(&mut body, None);
    body.push_str("<button type=\"submit\">Add</button>\n</form>\n");

    page("Employees", &body)
}

/// Edit form pre-filled with the current values of one employee.
pub fn edit(employee: &Employee) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<h1>Edit employee {id}</h1>\n<form method=\"post\" action=\"/edit/{id}\">\n",
        id = employee.id
    ));
    employee_inputs(&mut body, Some(employee));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">Back to list</a></p>\n");

    page("Edit employee", &body)
}

/// A single message with a link back to the list.
pub fn message(text: &str) -> String {
    let body = format!(
        "<p class=\"message\">{}</p>\n<p><a href=\"/\">Back to list</a></p>\n",
        escape_html(text)
    );
    page("Employees", &body)
}
