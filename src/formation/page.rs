//! Browser form posting to `/form-company`.

use super::models::StateCode;

fn state_options() -> String {
    StateCode::ALL
        .iter()
        .map(|state| {
            format!(
                r#"<option value="{code}">{code} - {name}</option>"#,
                code = state.code(),
                name = state.name()
            )
        })
        .collect()
}

pub fn render_form_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Company Formation</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; }}
        form {{ display: grid; gap: 15px; }}
        label {{ font-weight: bold; }}
        input, select {{ padding: 8px; font-size: 16px; }}
        fieldset {{ display: grid; gap: 10px; border: 1px solid #ccc; padding: 12px; }}
        button {{ background: #007bff; color: white; border: none; padding: 10px 20px; cursor: pointer; }}
        button:hover {{ background: #0056b3; }}
    </style>
</head>
<body>
    <h1>Company Formation</h1>
    <form action="/form-company" method="POST">
        <label for="company_name">Company Name:</label>
        <input type="text" id="company_name" name="company_name" required>

        <label for="state_of_formation">State of Formation:</label>
        <select id="state_of_formation" name="state_of_formation" required>
            <option value="">Select a state</option>
            {states}
        </select>

        <label for="company_type">Company Type:</label>
        <select id="company_type" name="company_type" required>
            <option value="">Select a type</option>
            <option value="corporation">Corporation</option>
            <option value="LLC">LLC</option>
        </select>

        <label for="incorporator_name">Incorporator Name:</label>
        <input type="text" id="incorporator_name" name="incorporator_name" required>

        <fieldset>
            <legend>New York only (optional)</legend>
            <label for="incorporator_address">Incorporator Address:</label>
            <input type="text" id="incorporator_address" name="incorporator_address">

            <label for="county">County:</label>
            <input type="text" id="county" name="county" placeholder="NEW YORK COUNTY">

            <label for="shares">Shares:</label>
            <input type="number" id="shares" name="shares" min="1" placeholder="200">

            <label for="par_value">Par Value:</label>
            <input type="number" id="par_value" name="par_value" min="0" step="0.01" placeholder="0">
        </fieldset>

        <button type="submit">Submit</button>
    </form>
</body>
</html>
"#,
        states = state_options()
    )
}
