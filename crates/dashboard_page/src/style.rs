pub(crate) const STYLE: &str = r#"
:root {
    --bg-color: #f9f9f9;
    --card-bg: #ffffff;
    --text-color: #333333;
    --primary-color: #4361ee;
    --secondary-color: #3f37c9;
    --border-color: #e0e0e0;
    --shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
[data-theme="dark"] {
    --bg-color: #121212;
    --card-bg: #1e1e1e;
    --text-color: #e0e0e0;
    --border-color: #333333;
    --shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
}
body {
    background-color: var(--bg-color);
    color: var(--text-color);
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    transition: all 0.3s ease;
    margin: 0;
}
main { max-width: 960px; margin: 0 auto; padding: 24px; }
.header-container {
    background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 30px;
    text-align: center;
    box-shadow: var(--shadow);
}
.header-container h1 { color: white; font-weight: 700; margin: 10px 0; font-size: 2.5em; }
.header-container p { color: rgba(255, 255, 255, 0.9); font-size: 1.1em; }
.logo { width: 100px; height: 100px; object-fit: contain; }
.custom-card, .panel {
    background-color: var(--card-bg);
    border-radius: 10px;
    padding: 20px;
    margin: 15px 0;
    box-shadow: var(--shadow);
}
.custom-card-title { font-size: 1.5em; font-weight: 600; margin-bottom: 15px; color: var(--primary-color); }
.nav-container { display: flex; justify-content: center; gap: 15px; margin-bottom: 20px; }
.nav-btn {
    background-color: var(--card-bg);
    color: var(--text-color);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 10px 16px;
    cursor: pointer;
    font-weight: 500;
}
.nav-btn:hover { background-color: var(--primary-color); border-color: var(--primary-color); color: white; }
.action-btn {
    background-color: var(--primary-color);
    color: white;
    border: none;
    border-radius: 8px;
    padding: 12px 24px;
    margin-top: 10px;
    cursor: pointer;
    font-weight: 500;
}
.action-btn:hover { background-color: var(--secondary-color); }
.theme-toggle {
    position: fixed;
    top: 20px;
    right: 20px;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: 1px solid var(--border-color);
    background-color: var(--card-bg);
    color: var(--text-color);
    box-shadow: var(--shadow);
    cursor: pointer;
    z-index: 1000;
}
select, input, textarea {
    box-sizing: border-box;
    width: 100%;
    padding: 12px;
    border-radius: 8px;
    border: 1px solid var(--border-color);
    background-color: var(--card-bg);
    color: var(--text-color);
    margin-bottom: 15px;
}
.feature-container { display: flex; flex-wrap: wrap; gap: 20px; justify-content: center; margin-top: 20px; }
.feature-card {
    background-color: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 10px;
    padding: 20px;
    width: 250px;
    text-align: center;
    box-shadow: var(--shadow);
}
.feature-icon { font-size: 2.5em; margin-bottom: 15px; }
.panel-header { display: flex; justify-content: space-between; align-items: center; }
.panel-close { background: none; border: none; color: var(--text-color); font-size: 1.5em; cursor: pointer; }
.notice { border-radius: 8px; padding: 12px 16px; margin: 15px 0; }
.notice-info { border-left: 4px solid var(--primary-color); background-color: var(--card-bg); }
.notice-error { border-left: 4px solid #d62828; background-color: var(--card-bg); }
footer { text-align: center; margin-top: 40px; padding: 20px; opacity: 0.7; font-size: 0.9em; }
"#;
